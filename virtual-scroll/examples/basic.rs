// Example: a fixed-size list, one programmatic scroll, and the rendered window.
use virtual_scroll::{Align, ConfigError, FixedSizeList, ItemProps, ListOptions};

fn main() -> Result<(), ConfigError> {
    let options = ListOptions::new(1_000_000, 20)
        .with_height(400)
        .with_children(|props: ItemProps| format!("row {}", props.index));
    let mut list = FixedSizeList::new(options)?;
    list.mount(None);

    list.scroll_to(123_456, 0);
    let frame = list.render();
    list.commit(None);
    println!("total_size={}", list.estimated_total_size());
    println!("range={:?}", frame.range);
    println!("first={:?}", frame.items.first().map(|item| &item.element));

    list.scroll_to_item(999_999, Align::End, 16);
    println!("after scroll_to_item: offset={}", list.scroll_offset());
    Ok(())
}

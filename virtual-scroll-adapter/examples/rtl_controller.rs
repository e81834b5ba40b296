use virtual_scroll::{
    ConfigError, Direction, FixedSizeList, ItemProps, Layout, ListOptions, RtlOffsetType,
    ScrollSurface, probe_rtl_offset_type,
};
use virtual_scroll_adapter::{Controller, SimulatedSurface};

fn main() -> Result<(), ConfigError> {
    // Example: detect the host's RTL convention, then drive a horizontal RTL list.
    //
    // An adapter would:
    // - forward user scroll events (here: `user_scroll`)
    // - call tick(now_ms) from a frame loop or a timer at `next_deadline_ms`
    // - apply each returned frame to the real UI
    let mut probe = SimulatedSurface::new(50, 50)
        .with_content_size(100, 50)
        .with_rtl(RtlOffsetType::PositiveDescending);
    let convention = probe_rtl_offset_type(&mut probe);
    println!("detected={convention:?}");

    let options = ListOptions::new(500, 60)
        .with_layout(Layout::Horizontal)
        .with_direction(Direction::Rtl)
        .with_width(360)
        .with_rtl_offset_type(convention)
        .with_children(|props: ItemProps| props.style.right);
    let list = FixedSizeList::new(options)?;
    let mut c = Controller::new(list, SimulatedSurface::new(360, 80).with_rtl(convention));
    let frame = c.mount(0);
    println!("mounted: range={:?}", frame.range);

    let mut now_ms = 0u64;
    for step in 1..=5u64 {
        now_ms += 16;
        if let Some(frame) = c.user_scroll(Some(step * 250), None, now_ms) {
            println!(
                "t={now_ms} raw_left={} range={:?}",
                c.surface().metrics().scroll_left,
                frame.range
            );
        }
    }

    while let Some(deadline) = c.next_deadline_ms() {
        now_ms = deadline;
        if let Some(frame) = c.tick(now_ms) {
            println!("t={now_ms} settled: range={:?}", frame.range);
        }
    }
    Ok(())
}

// Example: a variable-size grid whose column widths change after the first render.
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use virtual_scroll::{
    CellProps, ConfigError, GridOptions, ItemSize, ScrollToPosition, VariableSizeGrid,
};

fn main() -> Result<(), ConfigError> {
    let wide = Arc::new(AtomicU32::new(0));
    let wide_in_fn = Arc::clone(&wide);
    let options = GridOptions::new(
        10_000,
        ItemSize::per_index(|row| 24 + (row % 3) as u32 * 8),
        200,
        ItemSize::per_index(move |col| 80 + wide_in_fn.load(Ordering::Relaxed) * (col % 2) as u32),
    )
    .with_width(640)
    .with_height(480)
    .with_children(|props: CellProps| (props.row_index, props.column_index, props.style.left));
    let mut grid = VariableSizeGrid::new(options)?;
    grid.mount(None);

    grid.scroll_to(
        ScrollToPosition {
            left: Some(2_000),
            top: Some(50_000),
        },
        0,
    );
    let frame = grid.render();
    grid.commit(None);
    println!("range={:?}", frame.range);
    println!("cells={} inner={:?}", frame.cells.len(), frame.inner.style);

    // Odd columns got wider: forget every measured width and re-render.
    wide.store(40, Ordering::Relaxed);
    grid.reset_after_column_index(0, true);
    let frame = grid.render();
    grid.commit(None);
    println!("after reset: columns={:?}", frame.range.columns);
    println!("first cell={:?}", frame.cells.first().map(|cell| cell.element));
    Ok(())
}

use crate::*;

use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start))
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

/// In-memory host container: stores raw offsets and records every write.
#[derive(Debug, Default)]
struct TestSurface {
    metrics: ScrollMetrics,
    scrollbar: ScrollbarSize,
    writes: Vec<(char, i64)>,
}

impl TestSurface {
    fn new(client_width: u64, client_height: u64, scroll_width: u64, scroll_height: u64) -> Self {
        Self {
            metrics: ScrollMetrics {
                client_width,
                client_height,
                scroll_width,
                scroll_height,
                ..ScrollMetrics::default()
            },
            ..Self::default()
        }
    }
}

impl ScrollSurface for TestSurface {
    fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    fn set_scroll_left(&mut self, scroll_left: i64) {
        self.metrics.scroll_left = scroll_left;
        self.writes.push(('x', scroll_left));
    }

    fn set_scroll_top(&mut self, scroll_top: i64) {
        self.metrics.scroll_top = scroll_top;
        self.writes.push(('y', scroll_top));
    }

    fn scrollbar_size(&self) -> ScrollbarSize {
        self.scrollbar
    }
}

fn vertical_metrics(scroll_top: i64, client_height: u64, scroll_height: u64) -> ScrollMetrics {
    ScrollMetrics {
        scroll_top,
        client_width: 300,
        client_height,
        scroll_width: 300,
        scroll_height,
        ..ScrollMetrics::default()
    }
}

fn fixed_list(item_count: usize, item_size: u32, height: u32) -> FixedSizeList<usize> {
    let options = ListOptions::new(item_count, item_size)
        .with_height(height)
        .with_children(|props: ItemProps| props.index);
    FixedSizeList::new(options).unwrap()
}

fn variable_list(sizes: &[u32], height: u32) -> VariableSizeList<usize> {
    let sizes: Arc<Vec<u32>> = Arc::new(sizes.to_vec());
    let count = sizes.len();
    let options = ListOptions::new(count, ItemSize::per_index(move |i| sizes[i]))
        .with_height(height)
        .with_children(|props: ItemProps| props.index);
    VariableSizeList::new(options).unwrap()
}

fn prefix_sums(sizes: &[u32]) -> Vec<u64> {
    let mut out = Vec::with_capacity(sizes.len() + 1);
    let mut acc = 0u64;
    out.push(acc);
    for &size in sizes {
        acc += size as u64;
        out.push(acc);
    }
    out
}

fn expected_start(prefix: &[u64], offset: u64) -> usize {
    let count = prefix.len() - 1;
    let mut start = 0;
    for i in 0..count {
        if prefix[i] <= offset {
            start = i;
        }
    }
    start
}

fn expected_stop(prefix: &[u64], start: usize, offset: u64, viewport: u64) -> usize {
    let count = prefix.len() - 1;
    (start..count)
        .find(|&i| prefix[i + 1] >= offset + viewport)
        .unwrap_or(count - 1)
}

#[test]
fn fixed_list_window_at_offset_205() {
    let mut list = fixed_list(1000, 20, 100);
    assert!(list.scroll_to(205, 0));
    assert!(!list.is_scrolling());

    assert_eq!(
        list.range_to_render(),
        ItemRange {
            overscan_start_index: 8,
            overscan_stop_index: 17,
            visible_start_index: 10,
            visible_stop_index: 15,
        }
    );

    let frame = list.render();
    let indexes: Vec<usize> = frame.items.iter().map(|item| item.index).collect();
    assert_eq!(indexes, (8..=17).collect::<Vec<_>>());
    assert_eq!(frame.items[0].element, 8);
    assert_eq!(frame.items[0].key, 8);
}

#[test]
fn fixed_list_styles_and_container_props() {
    let mut list = fixed_list(1000, 20, 100);
    let frame = list.render();

    assert_eq!(frame.items.len(), 7);
    assert_eq!(frame.items[3].index, 3);

    assert_eq!(frame.outer.element_type.as_ref(), "scroll");
    assert_eq!(frame.outer.style.position, Position::Relative);
    assert_eq!(frame.outer.style.height, Length::Px(100));
    assert_eq!(frame.outer.style.width, Length::FULL);
    assert_eq!(frame.inner.element_type.as_ref(), "view");
    assert_eq!(frame.inner.style.height, Length::Px(20_000));
    assert_eq!(frame.inner.style.width, Length::FULL);
    assert_eq!(frame.inner.style.pointer_events, PointerEvents::Auto);
}

#[test]
fn item_styles_follow_layout_and_direction() {
    let options = ListOptions::new(100, 20)
        .with_height(100)
        .with_children(|props: ItemProps| props);
    let mut list = FixedSizeList::new(options).unwrap();
    let frame = list.render();
    assert_eq!(
        frame.items[2].element.style,
        ItemStyle {
            position: Position::Absolute,
            left: Some(0),
            right: None,
            top: 40,
            width: Length::FULL,
            height: Length::Px(20),
        }
    );

    let options = ListOptions::new(100, 30)
        .with_layout(Layout::Horizontal)
        .with_direction(Direction::Rtl)
        .with_width(120)
        .with_children(|props: ItemProps| props);
    let mut list = FixedSizeList::new(options).unwrap();
    let frame = list.render();
    assert_eq!(
        frame.items[2].element.style,
        ItemStyle {
            position: Position::Absolute,
            left: None,
            right: Some(60),
            top: 0,
            width: Length::Px(30),
            height: Length::FULL,
        }
    );
    assert_eq!(frame.inner.style.width, Length::Px(3000));
    assert_eq!(frame.inner.style.height, Length::FULL);
    assert_eq!(frame.outer.style.direction, Direction::Rtl);
}

#[test]
fn custom_item_keys_and_element_types() {
    let options = ListOptions::new_with_key(50, 10u32, |i| (i as u64) * 10)
        .with_height(30)
        .with_outer_element_type("ul")
        .with_inner_element_type("li-host")
        .with_class_name("feed")
        .with_children(|props: ItemProps| props.index);
    let mut list = FixedSizeList::new(options).unwrap();
    let frame = list.render();
    let keys: Vec<u64> = frame.items.iter().map(|item| item.key).collect();
    assert_eq!(keys, vec![0, 10, 20, 30, 40]);
    assert_eq!(frame.outer.element_type.as_ref(), "ul");
    assert_eq!(frame.outer.class_name.as_deref(), Some("feed"));
    assert_eq!(frame.inner.element_type.as_ref(), "li-host");
}

#[test]
fn scroll_to_item_end_clamps_to_last_offset() {
    let mut list = fixed_list(1000, 20, 100);
    assert!(list.scroll_to_item(999, Align::End, 0));
    assert_eq!(list.scroll_offset(), 19_900);

    // Out-of-range indexes clamp to the last item.
    let mut list = fixed_list(1000, 20, 100);
    assert!(list.scroll_to_item(5000, Align::Start, 0));
    assert_eq!(list.scroll_offset(), 19_900);
}

#[test]
fn alignment_modes() {
    let mut list = fixed_list(1000, 20, 100);

    list.scroll_to_item(10, Align::Start, 0);
    assert_eq!(list.scroll_offset(), 200);

    // Already visible: auto does not move.
    assert!(!list.scroll_to_item(12, Align::Auto, 0));
    assert_eq!(list.scroll_offset(), 200);

    // After the viewport: auto scrolls just far enough.
    list.scroll_to_item(20, Align::Auto, 0);
    assert_eq!(list.scroll_offset(), 320);

    list.scroll_to_item(50, Align::Center, 0);
    assert_eq!(list.scroll_offset(), 960);

    list.scroll_to_item(60, Align::End, 0);
    assert_eq!(list.scroll_offset(), 1120);

    // Within one viewport: smart behaves like auto.
    list.scroll_to_item(65, Align::Smart, 0);
    assert_eq!(list.scroll_offset(), 1220);

    // Far away: smart centers.
    list.scroll_to_item(500, Align::Smart, 0);
    assert_eq!(list.scroll_offset(), 9960);
}

#[test]
fn center_alignment_snaps_at_the_edges() {
    let mut list = fixed_list(1000, 20, 100);
    list.scroll_to(5000, 0);

    list.scroll_to_item(2, Align::Center, 0);
    assert_eq!(list.scroll_offset(), 0);

    list.scroll_to_item(999, Align::Center, 0);
    assert_eq!(list.scroll_offset(), 19_900);

    list.scroll_to_item(0, Align::Center, 0);
    assert_eq!(list.scroll_offset(), 0);
}

#[test]
fn property_fixed_start_index_is_monotonic_and_covers_the_viewport() {
    for seed in 0..32u64 {
        let mut rng = Lcg::new(seed);
        let count = rng.gen_range_usize(1, 400);
        let size = rng.gen_range_u32(1, 64);
        let viewport = rng.gen_range_u32(1, 500);
        let mut list = fixed_list(count, size, viewport);
        let sizes = vec![size; count];
        let prefix = prefix_sums(&sizes);
        let total = prefix[count];
        let max_offset = total.saturating_sub(viewport as u64);

        let mut offsets: Vec<u64> = (0..64)
            .map(|_| rng.gen_range_u64(0, max_offset + 1))
            .collect();
        offsets.sort_unstable();

        let mut prev_start = 0;
        for offset in offsets {
            list.scroll_to(offset, 0);
            let range = list.range_to_render();
            let start = range.visible_start_index;
            let stop = range.visible_stop_index;

            assert!(start >= prev_start, "seed={seed} offset={offset}");
            prev_start = start;

            // The start item contains the offset or precedes it.
            assert!(prefix[start] <= offset, "seed={seed} offset={offset}");
            assert_eq!(start, expected_start(&prefix, offset), "seed={seed}");
            assert_eq!(
                stop,
                expected_stop(&prefix, start, offset, viewport as u64),
                "seed={seed} offset={offset}"
            );

            let window_end = offset + viewport as u64;
            for i in 0..count {
                let intersects = prefix[i] < window_end && prefix[i + 1] > offset;
                if intersects {
                    assert!(
                        (start..=stop).contains(&i),
                        "seed={seed} offset={offset} index={i}"
                    );
                }
            }
        }
    }
}

#[test]
fn property_variable_lookups_match_brute_force_prefix_sums() {
    for seed in 0..32u64 {
        let mut rng = Lcg::new(seed.wrapping_add(100));
        let count = rng.gen_range_usize(1, 300);
        let sizes: Vec<u32> = (0..count).map(|_| rng.gen_range_u32(1, 80)).collect();
        let viewport = rng.gen_range_u32(1, 400);
        let prefix = prefix_sums(&sizes);
        let total = prefix[count];
        let max_offset = total.saturating_sub(viewport as u64);

        let mut list = variable_list(&sizes, viewport);
        // Random order: alternates between the measured prefix and exponential search.
        for _ in 0..64 {
            let offset = rng.gen_range_u64(0, max_offset + 1);
            list.scroll_to(offset, 0);
            let range = list.range_to_render();
            let start = expected_start(&prefix, offset);
            assert_eq!(range.visible_start_index, start, "seed={seed} offset={offset}");
            assert_eq!(
                range.visible_stop_index,
                expected_stop(&prefix, start, offset, viewport as u64),
                "seed={seed} offset={offset}"
            );
        }

    }
}

#[test]
fn variable_item_styles_match_prefix_sums() {
    let sizes: Vec<u32> = (0..200).map(|i| 10 + (i % 7) * 5).collect();
    let prefix = prefix_sums(&sizes);
    let sizes_fn: Arc<Vec<u32>> = Arc::new(sizes.clone());
    let options = ListOptions::new(200, ItemSize::per_index(move |i| sizes_fn[i]))
        .with_height(150)
        .with_children(|props: ItemProps| props);
    let mut list = VariableSizeList::new(options).unwrap();

    list.scroll_to(1234, 0);
    let frame = list.render();
    assert!(!frame.items.is_empty());
    for item in &frame.items {
        let style = item.element.style;
        assert_eq!(style.top, prefix[item.index]);
        assert_eq!(style.height, Length::Px(sizes[item.index] as u64));
    }
}

#[test]
fn variable_total_size_mixes_measured_and_estimated() {
    let sizes: Vec<u32> = (0..100).map(|i| 10 + (i % 7)).collect();
    let prefix = prefix_sums(&sizes);
    let mut list = variable_list(&sizes, 100);

    // Nothing is measured before the first lookup.
    assert_eq!(list.instance_props().last_measured_index(), None);
    assert_eq!(list.estimated_total_size(), 100 * DEFAULT_ESTIMATED_ITEM_SIZE as u64);

    let frame = list.render();
    let measured = list
        .instance_props()
        .last_measured_index()
        .map(|i| i + 1)
        .unwrap_or(0);
    assert!(measured > 0 && measured < 100);
    let expected = prefix[measured] + (100 - measured) as u64 * DEFAULT_ESTIMATED_ITEM_SIZE as u64;
    assert_eq!(list.estimated_total_size(), expected);
    assert_eq!(frame.inner.style.height, Length::Px(expected));
}

#[test]
fn variable_sizes_are_measured_lazily() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_in_fn = Arc::clone(&calls);
    let options = ListOptions::new(
        10_000,
        ItemSize::per_index(move |_| {
            calls_in_fn.fetch_add(1, Ordering::Relaxed);
            10
        }),
    )
    .with_height(100)
    .with_children(|props: ItemProps| props.index);
    let mut list = VariableSizeList::new(options).unwrap();

    let frame = list.render();
    assert_eq!(frame.range.visible_stop_index, 9);
    assert_eq!(frame.range.overscan_stop_index, 11);
    assert_eq!(list.instance_props().last_measured_index(), Some(11));
    assert_eq!(calls.load(Ordering::Relaxed), 12);
}

#[test]
fn reset_after_index_requeries_sizes() {
    let base = Arc::new(AtomicU32::new(10));
    let base_in_fn = Arc::clone(&base);
    let options = ListOptions::new(
        50,
        ItemSize::per_index(move |_| base_in_fn.load(Ordering::Relaxed)),
    )
    .with_height(100)
    .with_children(|props: ItemProps| props);
    let mut list = VariableSizeList::new(options).unwrap();

    let frame = list.render();
    assert_eq!(frame.items[5].element.style.top, 50);

    base.store(20, Ordering::Relaxed);
    // Stale until told otherwise.
    let frame = list.render();
    assert_eq!(frame.items[5].element.style.top, 50);
    assert!(!list.needs_render());

    let generation = list.style_cache_generation();
    list.reset_after_index(0, true);
    assert!(list.needs_render());
    assert_eq!(list.style_cache_generation(), generation + 1);
    assert_eq!(list.instance_props().last_measured_index(), None);

    let frame = list.render();
    assert_eq!(frame.items[5].element.style.top, 100);
    assert_eq!(frame.items[5].element.style.height, Length::Px(20));
}

#[test]
fn reset_after_index_keeps_the_prefix() {
    let sizes = vec![10u32; 40];
    let mut list = variable_list(&sizes, 100);
    list.render();
    assert_eq!(list.instance_props().last_measured_index(), Some(11));

    list.reset_after_index(4, false);
    assert_eq!(list.instance_props().last_measured_index(), Some(3));
    assert!(!list.needs_render());
}

#[test]
fn shrinking_item_count_clamps_variable_measurements() {
    let sizes = vec![10u32; 40];
    let mut list = variable_list(&sizes, 100);
    list.scroll_to(200, 0);
    list.render();
    assert!(list.instance_props().last_measured_index().unwrap_or(0) > 5);

    list.update_options(|o| o.item_count = 5).unwrap();
    let frame = list.render();
    assert_eq!(frame.range.overscan_stop_index, 4);
    assert_eq!(list.instance_props().last_measured_index(), Some(4));
    assert_eq!(list.estimated_total_size(), 50);
}

#[test]
fn host_scroll_sets_direction_and_is_scrolling() {
    let mut list = fixed_list(1000, 20, 100);

    assert!(list.handle_scroll(&vertical_metrics(205, 100, 20_000), 0));
    let state = list.scroll_state();
    assert_eq!(state.scroll_offset, 205);
    assert_eq!(state.scroll_direction, ScrollDirection::Forward);
    assert!(state.is_scrolling);
    assert!(!state.scroll_update_was_requested);

    assert!(list.handle_scroll(&vertical_metrics(100, 100, 20_000), 16));
    assert_eq!(list.scroll_direction(), ScrollDirection::Backward);

    // Same offset: no transition.
    assert!(!list.handle_scroll(&vertical_metrics(100, 100, 20_000), 32));
}

#[test]
fn host_offsets_are_clamped_into_the_scrollable_extent() {
    let mut list = fixed_list(1000, 20, 100);

    // Overscroll bounce above the top clamps to 0, which is the current offset.
    assert!(!list.handle_scroll(&vertical_metrics(-50, 100, 20_000), 0));
    assert_eq!(list.scroll_offset(), 0);

    assert!(list.handle_scroll(&vertical_metrics(25_000, 100, 20_000), 0));
    assert_eq!(list.scroll_offset(), 19_900);
}

#[test]
fn overscan_is_asymmetric_while_scrolling() {
    let mut list = fixed_list(1000, 20, 100);

    list.handle_scroll(&vertical_metrics(400, 100, 20_000), 0);
    assert_eq!(
        list.range_to_render(),
        ItemRange {
            overscan_start_index: 19,
            overscan_stop_index: 26,
            visible_start_index: 20,
            visible_stop_index: 24,
        }
    );

    list.handle_scroll(&vertical_metrics(200, 100, 20_000), 50);
    assert_eq!(
        list.range_to_render(),
        ItemRange {
            overscan_start_index: 8,
            overscan_stop_index: 15,
            visible_start_index: 10,
            visible_stop_index: 14,
        }
    );

    assert!(list.tick(200));
    assert_eq!(
        list.range_to_render(),
        ItemRange {
            overscan_start_index: 8,
            overscan_stop_index: 16,
            visible_start_index: 10,
            visible_stop_index: 14,
        }
    );
}

#[test]
fn overscan_count_zero_still_renders_one_extra_item() {
    let options = ListOptions::new(100, 20)
        .with_height(100)
        .with_overscan_count(0)
        .with_children(|props: ItemProps| props.index);
    let mut list = FixedSizeList::new(options).unwrap();
    list.scroll_to(200, 0);
    let range = list.range_to_render();
    assert_eq!(range.overscan_start_index, 9);
    assert_eq!(range.overscan_stop_index, 15);
}

#[test]
fn quiet_period_resets_is_scrolling_after_the_last_event() {
    let mut list = fixed_list(1000, 20, 100);
    let generation = list.style_cache_generation();

    list.handle_scroll(&vertical_metrics(100, 100, 20_000), 0);
    list.handle_scroll(&vertical_metrics(200, 100, 20_000), 100);
    list.handle_scroll(&vertical_metrics(300, 100, 20_000), 200);

    assert!(!list.tick(349));
    assert!(list.is_scrolling());
    assert_eq!(
        list.pending_timeout().map(|t| t.deadline_ms()),
        Some(200 + IS_SCROLLING_DEBOUNCE_INTERVAL_MS)
    );

    assert!(list.tick(350));
    assert!(!list.is_scrolling());
    assert!(list.pending_timeout().is_none());
    assert!(!list.tick(1000));

    // The style cache drop waits for the commit that follows the idle render.
    assert_eq!(list.style_cache_generation(), generation);
    let frame = list.render();
    assert_eq!(frame.inner.style.pointer_events, PointerEvents::Auto);
    list.commit(None);
    assert_eq!(list.style_cache_generation(), generation + 1);
    list.commit(None);
    assert_eq!(list.style_cache_generation(), generation + 1);
}

#[test]
fn pointer_events_are_disabled_while_scrolling() {
    let options = ListOptions::new(100, 20)
        .with_height(100)
        .with_use_is_scrolling(true)
        .with_children(|props: ItemProps| props.is_scrolling);
    let mut list = FixedSizeList::new(options).unwrap();

    list.handle_scroll(&vertical_metrics(40, 100, 2000), 0);
    let frame = list.render();
    assert_eq!(frame.inner.style.pointer_events, PointerEvents::None);
    assert!(frame.items.iter().all(|item| item.element == Some(true)));

    list.tick(150);
    let frame = list.render();
    assert!(frame.items.iter().all(|item| item.element == Some(false)));

    // Without use_is_scrolling the flag is not passed through.
    let options = ListOptions::new(100, 20)
        .with_height(100)
        .with_children(|props: ItemProps| props.is_scrolling);
    let mut plain = FixedSizeList::new(options).unwrap();
    plain.handle_scroll(&vertical_metrics(40, 100, 2000), 0);
    let frame = plain.render();
    assert_eq!(frame.inner.style.pointer_events, PointerEvents::None);
    assert!(frame.items.iter().all(|item| item.element.is_none()));
}

#[test]
fn scroll_to_is_idempotent_and_observers_fire_on_change_only() {
    let scrolls = Arc::new(Mutex::new(Vec::new()));
    let ranges = Arc::new(Mutex::new(Vec::new()));
    let scrolls_in_cb = Arc::clone(&scrolls);
    let ranges_in_cb = Arc::clone(&ranges);
    let options = ListOptions::new(1000, 20)
        .with_height(100)
        .with_children(|props: ItemProps| props.index)
        .with_on_scroll(Some(move |event| scrolls_in_cb.lock().unwrap().push(event)))
        .with_on_items_rendered(Some(move |range| ranges_in_cb.lock().unwrap().push(range)));
    let mut list = FixedSizeList::new(options).unwrap();

    list.render();
    list.mount(None);
    assert_eq!(
        scrolls.lock().unwrap().as_slice(),
        &[ListScrollEvent {
            scroll_direction: ScrollDirection::Forward,
            scroll_offset: 0,
            scroll_update_was_requested: false,
        }]
    );
    assert_eq!(
        ranges.lock().unwrap().as_slice(),
        &[ItemRange {
            overscan_start_index: 0,
            overscan_stop_index: 6,
            visible_start_index: 0,
            visible_stop_index: 4,
        }]
    );

    assert!(list.scroll_to(300, 0));
    list.render();
    list.commit(None);
    assert!(!list.scroll_to(300, 10));
    assert!(!list.needs_render());
    list.commit(None);

    assert_eq!(scrolls.lock().unwrap().len(), 2);
    assert_eq!(
        scrolls.lock().unwrap()[1],
        ListScrollEvent {
            scroll_direction: ScrollDirection::Forward,
            scroll_offset: 300,
            scroll_update_was_requested: true,
        }
    );
    assert_eq!(ranges.lock().unwrap().len(), 2);
    assert_eq!(ranges.lock().unwrap()[1].overscan_start_index, 13);

    // The quiet period after a programmatic scroll changes neither payload.
    assert!(list.tick(150));
    list.render();
    list.commit(None);
    assert_eq!(scrolls.lock().unwrap().len(), 2);
    assert_eq!(ranges.lock().unwrap().len(), 2);
}

#[test]
fn empty_lists_skip_items_rendered() {
    let rendered = Arc::new(AtomicUsize::new(0));
    let scrolled = Arc::new(AtomicUsize::new(0));
    let rendered_in_cb = Arc::clone(&rendered);
    let scrolled_in_cb = Arc::clone(&scrolled);
    let options = ListOptions::new(0, 20)
        .with_height(100)
        .with_children(|props: ItemProps| props.index)
        .with_on_items_rendered(Some(move |_| {
            rendered_in_cb.fetch_add(1, Ordering::Relaxed);
        }))
        .with_on_scroll(Some(move |_| {
            scrolled_in_cb.fetch_add(1, Ordering::Relaxed);
        }));
    let mut list = FixedSizeList::new(options).unwrap();

    let frame = list.render();
    assert!(frame.items.is_empty());
    assert_eq!(frame.range, ItemRange::EMPTY);
    assert_eq!(frame.inner.style.height, Length::Px(0));
    list.mount(None);
    assert_eq!(rendered.load(Ordering::Relaxed), 0);
    assert_eq!(scrolled.load(Ordering::Relaxed), 1);

    // Scrolling to an item of an empty list resolves against index 0.
    assert!(!list.scroll_to_item(3, Align::Start, 0));
}

#[test]
fn requested_offsets_are_written_to_the_host_once() {
    let mut list = fixed_list(1000, 20, 100);
    let mut surface = TestSurface::new(300, 100, 300, 20_000);
    list.render();
    list.mount(Some(&mut surface));
    assert!(surface.writes.is_empty());

    list.scroll_to(300, 0);
    list.render();
    list.commit(Some(&mut surface));
    assert_eq!(surface.writes, vec![('y', 300)]);

    // The host echoes the write back as a scroll event: not a transition.
    let metrics = surface.metrics();
    assert!(!list.handle_scroll(&metrics, 5));
    assert!(list.scroll_state().scroll_update_was_requested);

    list.render();
    list.commit(Some(&mut surface));
    assert_eq!(surface.writes.len(), 1);

    // Host-originated offsets are never written back.
    surface.metrics.scroll_top = 500;
    let metrics = surface.metrics();
    assert!(list.handle_scroll(&metrics, 10));
    list.render();
    list.commit(Some(&mut surface));
    assert_eq!(surface.writes.len(), 1);
}

#[test]
fn initial_scroll_offset_is_written_on_mount() {
    let options = ListOptions::new(100, 20)
        .with_layout(Layout::Horizontal)
        .with_width(100)
        .with_initial_scroll_offset(400)
        .with_children(|props: ItemProps| props.index);
    let mut list = FixedSizeList::new(options).unwrap();
    assert_eq!(list.scroll_offset(), 400);
    assert_eq!(list.range_to_render().visible_start_index, 20);

    let mut surface = TestSurface::new(100, 50, 2000, 50);
    list.render();
    list.mount(Some(&mut surface));
    assert_eq!(surface.writes, vec![('x', 400)]);
}

#[test]
fn rtl_initial_offsets_are_written_in_the_host_convention() {
    for (convention, list_raw, grid_raw) in [
        (RtlOffsetType::Negative, -400, -400),
        (RtlOffsetType::PositiveDescending, 1500, 300),
        (RtlOffsetType::PositiveAscending, 400, 400),
    ] {
        let options = ListOptions::new(100, 20)
            .with_layout(Layout::Horizontal)
            .with_direction(Direction::Rtl)
            .with_width(100)
            .with_rtl_offset_type(convention)
            .with_initial_scroll_offset(400)
            .with_children(|props: ItemProps| props.index);
        let mut list = FixedSizeList::new(options).unwrap();
        let mut surface = TestSurface::new(100, 50, 2000, 50);
        list.render();
        list.mount(Some(&mut surface));
        assert_eq!(surface.writes, vec![('x', list_raw)], "{convention:?}");
        assert_eq!(convention.to_logical(list_raw, &surface.metrics()), 400);

        let options = GridOptions::new(50, 30, 10, 100)
            .with_width(300)
            .with_height(150)
            .with_direction(Direction::Rtl)
            .with_rtl_offset_type(convention)
            .with_initial_scroll(Some(400), Some(60))
            .with_children(|props: CellProps| (props.row_index, props.column_index));
        let mut grid = FixedSizeGrid::new(options).unwrap();
        let mut surface = TestSurface::new(300, 150, 1000, 1500);
        grid.render();
        grid.mount(Some(&mut surface));
        assert_eq!(surface.writes, vec![('x', grid_raw), ('y', 60)], "{convention:?}");
        assert_eq!(convention.to_logical(grid_raw, &surface.metrics()), 400);
    }
}

#[test]
fn scroll_to_item_accounts_for_a_cross_axis_scrollbar() {
    let mut list = fixed_list(1000, 20, 100);
    let mut surface = TestSurface::new(300, 100, 600, 20_000);
    surface.scrollbar = ScrollbarSize {
        vertical_width: 12,
        horizontal_height: 15,
    };
    list.render();
    list.mount(Some(&mut surface));

    list.scroll_to_item(20, Align::End, 0);
    assert_eq!(list.scroll_offset(), 400 + 15 + 20 - 100);

    // No horizontal overflow, no horizontal scrollbar.
    let mut list = fixed_list(1000, 20, 100);
    let mut surface = TestSurface::new(300, 100, 300, 20_000);
    surface.scrollbar.horizontal_height = 15;
    list.mount(Some(&mut surface));
    list.scroll_to_item(20, Align::End, 0);
    assert_eq!(list.scroll_offset(), 320);
}

fn rtl_list(rtl_offset_type: RtlOffsetType) -> FixedSizeList<usize> {
    let options = ListOptions::new(100, 20)
        .with_layout(Layout::Horizontal)
        .with_direction(Direction::Rtl)
        .with_width(100)
        .with_rtl_offset_type(rtl_offset_type)
        .with_children(|props: ItemProps| props.index);
    FixedSizeList::new(options).unwrap()
}

#[test]
fn rtl_offsets_are_normalized_for_every_convention() {
    let cases = [
        (RtlOffsetType::Negative, -300, -500),
        (RtlOffsetType::PositiveDescending, 1600, 1400),
        (RtlOffsetType::PositiveAscending, 300, 500),
    ];
    for (convention, raw_300, raw_500) in cases {
        let mut list = rtl_list(convention);
        let mut surface = TestSurface::new(100, 50, 2000, 50);
        list.render();
        list.mount(Some(&mut surface));

        surface.metrics.scroll_left = raw_300;
        let metrics = surface.metrics();
        assert!(list.handle_scroll(&metrics, 0), "{convention:?}");
        assert_eq!(list.scroll_offset(), 300, "{convention:?}");
        assert_eq!(list.scroll_direction(), ScrollDirection::Forward);

        list.scroll_to(500, 10);
        list.render();
        list.commit(Some(&mut surface));
        assert_eq!(surface.writes.last(), Some(&('x', raw_500)), "{convention:?}");
    }
}

#[test]
fn probe_detects_each_rtl_convention() {
    struct Probe {
        convention: RtlOffsetType,
        scroll_left: i64,
    }

    impl ScrollSurface for Probe {
        fn metrics(&self) -> ScrollMetrics {
            ScrollMetrics {
                scroll_left: self.scroll_left,
                client_width: 50,
                client_height: 50,
                scroll_width: 100,
                scroll_height: 50,
                ..ScrollMetrics::default()
            }
        }

        fn set_scroll_left(&mut self, scroll_left: i64) {
            self.scroll_left = match self.convention {
                RtlOffsetType::Negative => scroll_left.clamp(-50, 0),
                _ => scroll_left.clamp(0, 50),
            };
        }

        fn set_scroll_top(&mut self, _scroll_top: i64) {}

        fn scrollbar_size(&self) -> ScrollbarSize {
            ScrollbarSize::default()
        }
    }

    for convention in [
        RtlOffsetType::Negative,
        RtlOffsetType::PositiveDescending,
        RtlOffsetType::PositiveAscending,
    ] {
        let mut probe = Probe {
            convention,
            scroll_left: match convention {
                RtlOffsetType::PositiveDescending => 50,
                _ => 0,
            },
        };
        assert_eq!(probe_rtl_offset_type(&mut probe), convention);
    }
}

#[test]
fn unmount_cancels_the_timer_and_ignores_later_events() {
    let mut list = fixed_list(1000, 20, 100);
    list.mount(None);
    list.handle_scroll(&vertical_metrics(100, 100, 20_000), 0);
    assert!(list.pending_timeout().is_some());

    list.unmount();
    assert!(list.pending_timeout().is_none());
    assert!(!list.tick(1000));
    assert!(list.is_scrolling());
    assert!(!list.handle_scroll(&vertical_metrics(300, 100, 20_000), 10));
    assert!(!list.scroll_to(900, 10));
    assert!(!list.scroll_to_item(500, Align::Start, 10));
    assert_eq!(list.scroll_offset(), 100);
}

#[test]
fn set_options_drops_styles_only_for_size_affecting_changes() {
    let mut list = fixed_list(1000, 20, 100);
    list.render();
    let generation = list.style_cache_generation();
    assert!(list.style_cache_len() > 0);

    list.update_options(|o| o.overscan_count = 4).unwrap();
    assert_eq!(list.style_cache_generation(), generation);
    list.update_options(|o| o.item_size = ItemSize::Fixed(20)).unwrap();
    assert_eq!(list.style_cache_generation(), generation);

    list.update_options(|o| o.item_size = ItemSize::Fixed(25)).unwrap();
    assert_eq!(list.style_cache_generation(), generation + 1);
    list.update_options(|o| o.direction = Direction::Rtl).unwrap();
    assert_eq!(list.style_cache_generation(), generation + 2);
    list.update_options(|o| {
        o.layout = Layout::Horizontal;
        o.width = Length::Px(100);
    })
    .unwrap();
    assert_eq!(list.style_cache_generation(), generation + 3);
    assert_eq!(list.style_cache_len(), 0);
}

#[test]
fn set_options_compares_size_functions_by_identity() {
    let size = ItemSize::per_index(|i| 10 + (i % 3) as u32);
    let options = ListOptions::new(100, size.clone())
        .with_height(100)
        .with_children(|props: ItemProps| props.index);
    let mut list = VariableSizeList::new(options).unwrap();
    list.render();
    let generation = list.style_cache_generation();

    list.update_options(|o| o.item_size = size.clone()).unwrap();
    assert_eq!(list.style_cache_generation(), generation);

    list.update_options(|o| o.item_size = ItemSize::per_index(|i| 10 + (i % 3) as u32))
        .unwrap();
    assert_eq!(list.style_cache_generation(), generation + 1);
}

#[test]
fn invalid_configurations_are_rejected() {
    let children = |props: ItemProps| props.index;

    let err = FixedSizeList::new(
        ListOptions::new(10, ItemSize::per_index(|_| 10))
            .with_height(100)
            .with_children(children),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidItemSize {
            prop: "item_size",
            expected: "a number",
            found: "function",
        }
    );

    let err = FixedSizeList::new(
        ListOptions::new(10, 0)
            .with_height(100)
            .with_children(children),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidItemSize {
            expected: "a non-zero number",
            ..
        }
    ));

    let err = VariableSizeList::new(
        ListOptions::new(10, 20)
            .with_height(100)
            .with_children(children),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidItemSize {
            prop: "item_size",
            expected: "a function",
            found: "number",
        }
    );

    let err = FixedSizeList::<usize>::new(ListOptions::new(10, 20).with_height(100)).unwrap_err();
    assert_eq!(err, ConfigError::MissingChildren);

    let err = FixedSizeList::new(ListOptions::new(10, 20).with_children(children)).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidHeight {
            owner: "Vertical lists",
            found: "percent",
        }
    );

    let err = FixedSizeList::new(
        ListOptions::new(10, 20)
            .with_layout(Layout::Horizontal)
            .with_height(100)
            .with_children(children),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidWidth {
            owner: "Horizontal lists",
            found: "percent",
        }
    );
    assert!(
        err.to_string()
            .contains("Horizontal lists must specify a number for width")
    );
}

#[test]
fn failed_set_options_keeps_the_previous_options() {
    let mut list = fixed_list(1000, 20, 100);
    let err = list
        .update_options(|o| o.height = Length::Percent(50))
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHeight { .. }));
    assert_eq!(list.options().height, Length::Px(100));
    assert_eq!(list.render().items.len(), 7);
}

#[test]
fn configuration_enums_parse_from_strings() {
    assert_eq!("rtl".parse::<Direction>(), Ok(Direction::Rtl));
    assert_eq!("ltr".parse::<Direction>(), Ok(Direction::Ltr));
    assert_eq!("horizontal".parse::<Layout>(), Ok(Layout::Horizontal));
    assert_eq!("smart".parse::<Align>(), Ok(Align::Smart));
    assert_eq!(
        "positive-descending".parse::<RtlOffsetType>(),
        Ok(RtlOffsetType::PositiveDescending)
    );
    assert_eq!(
        "sideways".parse::<Layout>(),
        Err(ConfigError::InvalidLayout("sideways".to_string()))
    );
    assert_eq!(
        "up".parse::<Direction>(),
        Err(ConfigError::InvalidDirection("up".to_string()))
    );
    assert!(matches!(
        "middle".parse::<Align>(),
        Err(ConfigError::InvalidAlign(_))
    ));
}

#[test]
fn timer_arm_replaces_the_pending_handle() {
    let mut timer = Timer::new();
    let first = timer.request_timeout(0, 150);
    let second = timer.request_timeout(100, 150);
    assert_ne!(first.id(), second.id());
    assert_eq!(timer.pending(), Some(second));

    assert_eq!(timer.poll(200), None);
    assert_eq!(timer.poll(250), Some(second));
    assert_eq!(timer.poll(300), None);

    timer.request_timeout(300, 10);
    assert!(timer.cancel_timeout().is_some());
    assert_eq!(timer.poll(1000), None);
}

fn fixed_grid(
    row_count: usize,
    column_count: usize,
    row_height: u32,
    column_width: u32,
    width: u32,
    height: u32,
) -> FixedSizeGrid<(usize, usize)> {
    let options = GridOptions::new(row_count, row_height, column_count, column_width)
        .with_width(width)
        .with_height(height)
        .with_children(|props: CellProps| (props.row_index, props.column_index));
    FixedSizeGrid::new(options).unwrap()
}

#[test]
fn fixed_grid_window_at_origin() {
    let mut grid = fixed_grid(50, 3, 30, 100, 300, 150);
    assert_eq!(
        grid.range_to_render(),
        GridItemRange {
            columns: ItemRange {
                overscan_start_index: 0,
                overscan_stop_index: 2,
                visible_start_index: 0,
                visible_stop_index: 2,
            },
            rows: ItemRange {
                overscan_start_index: 0,
                overscan_stop_index: 5,
                visible_start_index: 0,
                visible_stop_index: 4,
            },
        }
    );

    let frame = grid.render();
    assert_eq!(frame.cells.len(), 18);
    assert_eq!(frame.cells[0].element, (0, 0));
    assert_eq!(frame.cells[1].element, (0, 1));
    assert_eq!(frame.cells[3].element, (1, 0));
    assert_eq!(
        frame.cells[4].key,
        CellKey {
            row_index: 1,
            column_index: 1,
        }
    );
    assert_eq!(frame.cells[4].key.to_string(), "1:1");
    assert_eq!(frame.inner.style.width, Length::Px(300));
    assert_eq!(frame.inner.style.height, Length::Px(1500));
}

#[test]
fn grid_cell_styles() {
    let options = GridOptions::new(10, 30, 10, 100)
        .with_width(300)
        .with_height(150)
        .with_children(|props: CellProps| props.style);
    let mut grid = FixedSizeGrid::new(options).unwrap();
    let frame = grid.render();
    let cell = frame
        .cells
        .iter()
        .find(|c| c.row_index == 2 && c.column_index == 1)
        .map(|c| c.element);
    assert_eq!(
        cell,
        Some(ItemStyle {
            position: Position::Absolute,
            left: Some(100),
            right: None,
            top: 60,
            width: Length::Px(100),
            height: Length::Px(30),
        })
    );

    grid.update_options(|o| o.direction = Direction::Rtl).unwrap();
    let frame = grid.render();
    let cell = frame
        .cells
        .iter()
        .find(|c| c.row_index == 2 && c.column_index == 1)
        .map(|c| c.element);
    assert_eq!(cell.and_then(|s| s.right), Some(100));
    assert_eq!(cell.and_then(|s| s.left), None);
}

#[test]
fn grid_axes_clamp_and_track_direction_independently() {
    let mut grid = fixed_grid(50, 10, 30, 100, 300, 150);
    let metrics = |scroll_left, scroll_top| ScrollMetrics {
        scroll_left,
        scroll_top,
        client_width: 300,
        client_height: 150,
        scroll_width: 1000,
        scroll_height: 1500,
    };

    assert!(grid.handle_scroll(&metrics(150, 90), 0));
    let state = grid.scroll_state();
    assert_eq!((state.scroll_left, state.scroll_top), (150, 90));
    assert_eq!(state.horizontal_scroll_direction, ScrollDirection::Forward);
    assert_eq!(state.vertical_scroll_direction, ScrollDirection::Forward);
    assert!(state.is_scrolling);

    assert!(grid.handle_scroll(&metrics(150, 30), 10));
    let state = grid.scroll_state();
    assert_eq!(state.horizontal_scroll_direction, ScrollDirection::Backward);
    assert_eq!(state.vertical_scroll_direction, ScrollDirection::Backward);

    assert!(grid.handle_scroll(&metrics(5000, -20), 20));
    assert_eq!((grid.scroll_left(), grid.scroll_top()), (700, 0));

    assert!(!grid.handle_scroll(&metrics(700, 0), 30));
}

#[test]
fn grid_scroll_to_keeps_unspecified_axes() {
    let mut grid = fixed_grid(50, 10, 30, 100, 300, 150);
    assert!(grid.scroll_to(
        ScrollToPosition {
            left: Some(200),
            top: None,
        },
        0
    ));
    assert_eq!((grid.scroll_left(), grid.scroll_top()), (200, 0));
    assert!(grid.scroll_state().scroll_update_was_requested);
    assert!(!grid.is_scrolling());

    assert!(!grid.scroll_to(
        ScrollToPosition {
            left: Some(200),
            top: Some(0),
        },
        10
    ));
    assert!(!grid.scroll_to(ScrollToPosition::default(), 10));
}

#[test]
fn grid_scroll_to_item_uses_perpendicular_scrollbars() {
    let mut grid = fixed_grid(50, 10, 30, 100, 300, 150);
    let mut surface = TestSurface::new(300, 150, 1000, 1500);
    surface.scrollbar = ScrollbarSize {
        vertical_width: 15,
        horizontal_height: 12,
    };
    grid.render();
    grid.mount(Some(&mut surface));

    assert!(grid.scroll_to_item(
        GridScrollTarget {
            row_index: Some(10),
            column_index: Some(5),
            align: Align::End,
        },
        0
    ));
    // Rows overflow, so the vertical scrollbar eats into the width, and vice versa.
    assert_eq!(grid.scroll_left(), 500 + 15 + 100 - 300);
    assert_eq!(grid.scroll_top(), 300 + 12 + 30 - 150);

    // Only the row axis moves.
    assert!(grid.scroll_to_item(
        GridScrollTarget {
            row_index: Some(0),
            column_index: None,
            align: Align::Start,
        },
        10
    ));
    assert_eq!(grid.scroll_left(), 315);
    assert_eq!(grid.scroll_top(), 0);

    grid.render();
    grid.commit(Some(&mut surface));
    assert_eq!(surface.writes, vec![('x', 315), ('y', 0)]);
}

#[test]
fn grid_rtl_commit_translates_the_horizontal_offset() {
    let options = GridOptions::new(50, 30, 10, 100)
        .with_width(300)
        .with_height(150)
        .with_direction(Direction::Rtl)
        .with_rtl_offset_type(RtlOffsetType::PositiveDescending)
        .with_children(|props: CellProps| props.column_index);
    let mut grid = FixedSizeGrid::new(options).unwrap();
    let mut surface = TestSurface::new(300, 150, 1000, 1500);
    grid.render();
    grid.mount(Some(&mut surface));

    surface.metrics.scroll_left = 600;
    let metrics = surface.metrics();
    grid.handle_scroll(&metrics, 0);
    assert_eq!(grid.scroll_left(), 100);

    grid.scroll_to(
        ScrollToPosition {
            left: Some(250),
            top: Some(60),
        },
        10,
    );
    grid.render();
    grid.commit(Some(&mut surface));
    assert_eq!(surface.writes, vec![('x', 450), ('y', 60)]);
}

#[test]
fn empty_grids_render_nothing_and_skip_items_rendered() {
    let rendered = Arc::new(AtomicUsize::new(0));
    let rendered_in_cb = Arc::clone(&rendered);
    let options = GridOptions::new(0, 30, 5, 100)
        .with_width(300)
        .with_height(150)
        .with_children(|props: CellProps| props.row_index)
        .with_on_items_rendered(Some(move |_| {
            rendered_in_cb.fetch_add(1, Ordering::Relaxed);
        }));
    let mut grid = FixedSizeGrid::new(options).unwrap();
    let frame = grid.render();
    assert!(frame.cells.is_empty());
    assert_eq!(frame.range, GridItemRange::default());
    grid.mount(None);
    assert_eq!(rendered.load(Ordering::Relaxed), 0);
}

#[test]
fn grid_observers_report_both_axes() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_in_cb = Arc::clone(&events);
    let options = GridOptions::new(50, 30, 10, 100)
        .with_width(300)
        .with_height(150)
        .with_children(|props: CellProps| props.row_index)
        .with_on_scroll(Some(move |event| events_in_cb.lock().unwrap().push(event)));
    let mut grid = FixedSizeGrid::new(options).unwrap();
    grid.render();
    grid.mount(None);

    grid.scroll_to(
        ScrollToPosition {
            left: Some(100),
            top: Some(0),
        },
        0,
    );
    grid.render();
    grid.commit(None);
    grid.commit(None);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[1],
        GridScrollEvent {
            horizontal_scroll_direction: ScrollDirection::Forward,
            scroll_left: 100,
            scroll_top: 0,
            scroll_update_was_requested: true,
            vertical_scroll_direction: ScrollDirection::Backward,
        }
    );
}

#[test]
fn grid_quiet_period_and_unmount() {
    let mut grid = fixed_grid(50, 10, 30, 100, 300, 150);
    let generation = grid.style_cache_generation();
    let metrics = ScrollMetrics {
        scroll_left: 0,
        scroll_top: 60,
        client_width: 300,
        client_height: 150,
        scroll_width: 1000,
        scroll_height: 1500,
    };
    grid.handle_scroll(&metrics, 0);
    let range = grid.range_to_render();
    assert_eq!(range.rows.overscan_start_index, 1);
    assert_eq!(range.rows.overscan_stop_index, 7);

    assert!(!grid.tick(149));
    assert!(grid.tick(150));
    grid.render();
    grid.commit(None);
    assert_eq!(grid.style_cache_generation(), generation + 1);

    grid.handle_scroll(
        &ScrollMetrics {
            scroll_top: 90,
            ..metrics
        },
        200,
    );
    grid.unmount();
    assert!(grid.pending_timeout().is_none());
    assert!(!grid.tick(1000));
    assert!(!grid.scroll_to(
        ScrollToPosition {
            left: Some(10),
            top: None,
        },
        1000
    ));
}

#[test]
fn variable_grid_reset_after_indices() {
    let row_base = Arc::new(AtomicU32::new(30));
    let row_base_in_fn = Arc::clone(&row_base);
    let options = GridOptions::new(
        20,
        ItemSize::per_index(move |_| row_base_in_fn.load(Ordering::Relaxed)),
        4,
        ItemSize::per_index(|i| 50 + 10 * i as u32),
    )
    .with_width(200)
    .with_height(120)
    .with_children(|props: CellProps| props.style);
    let mut grid = VariableSizeGrid::new(options).unwrap();

    let frame = grid.render();
    let style_at = |frame: &GridFrame<ItemStyle>, row: usize, column: usize| {
        frame
            .cells
            .iter()
            .find(|c| c.row_index == row && c.column_index == column)
            .map(|c| c.element)
    };
    let style = style_at(&frame, 2, 2);
    assert_eq!(style.map(|s| s.top), Some(60));
    assert_eq!(style.and_then(|s| s.left), Some(110));
    assert_eq!(style.map(|s| s.width), Some(Length::Px(70)));

    row_base.store(40, Ordering::Relaxed);
    grid.reset_after_row_index(0, true);
    assert!(grid.needs_render());
    assert_eq!(grid.row_instance_props().last_measured_index(), None);
    assert!(grid.column_instance_props().last_measured_index().is_some());

    let frame = grid.render();
    assert_eq!(style_at(&frame, 2, 2).map(|s| s.top), Some(80));
    assert_eq!(style_at(&frame, 2, 2).and_then(|s| s.left), Some(110));
}

#[test]
fn grid_validation() {
    let err = FixedSizeGrid::new(
        GridOptions::new(10, 30, 10, 100)
            .with_height(150)
            .with_children(|props: CellProps| props.row_index),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidWidth {
            owner: "Grids",
            found: "percent",
        }
    );

    let err = FixedSizeGrid::new(
        GridOptions::new(10, 30, 10, ItemSize::per_index(|_| 100))
            .with_width(300)
            .with_height(150)
            .with_children(|props: CellProps| props.row_index),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidItemSize {
            prop: "column_width",
            ..
        }
    ));

    let err = VariableSizeGrid::new(
        GridOptions::new(10, 30, 10, ItemSize::per_index(|_| 100))
            .with_width(300)
            .with_height(150)
            .with_children(|props: CellProps| props.row_index),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidItemSize {
            prop: "row_height",
            ..
        }
    ));
}

#[test]
fn engines_are_driven_through_the_shared_trait() {
    fn settle<En: ScrollEngine>(engine: &mut En, now_ms: u64) -> usize {
        let mut renders = 0;
        if engine.tick(now_ms) || engine.needs_render() {
            engine.render();
            engine.commit(None);
            renders += 1;
        }
        renders
    }

    let mut list = fixed_list(100, 20, 100);
    let mut grid = fixed_grid(50, 10, 30, 100, 300, 150);
    assert_eq!(settle(&mut list, 0), 1);
    assert_eq!(settle(&mut grid, 0), 1);
    assert_eq!(settle(&mut list, 0), 0);

    ScrollEngine::handle_scroll(&mut list, &vertical_metrics(40, 100, 2000), 0);
    assert!(ScrollEngine::is_scrolling(&list));
    assert_eq!(settle(&mut list, 10), 1);
    assert_eq!(settle(&mut list, 150), 1);
    assert!(!ScrollEngine::is_scrolling(&list));
}

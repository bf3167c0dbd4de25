use anyhow::ensure;
use swipe_demo::{SwipeList, ACTION_WIDTH, ROW_HEIGHT};
use swipe_layout::SwipeConfig;

fn main() -> anyhow::Result<()> {
    #[cfg(all(feature = "logging", not(target_arch = "wasm32")))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== SwipeLayout Demo ===");
    println!("Swipes the first row open, scrolls it off screen and back.");
    println!();

    let mut list = SwipeList::new(360, 8, SwipeConfig::default())?;
    let row_center = ROW_HEIGHT / 2.0;

    list.swipe(row_center, 180.0, 228.0, 4)?;
    let frames = list.settle();
    println!("row 0 settled at {} after {frames} frames", list.offset_of(0));
    ensure!(list.offset_of(0) == ACTION_WIDTH, "row 0 did not open");

    list.scroll_to(12)?;
    println!(
        "scrolled to row {}, row 0 saved at {}",
        list.first_visible(),
        list.offset_of(0)
    );

    list.scroll_to(0)?;
    ensure!(list.offset_of(0) == ACTION_WIDTH, "row 0 lost its offset");
    println!("row 0 restored at {}", list.offset_of(0));

    list.tap(20.0, row_center);
    list.settle();
    println!("row 0 closed by its action: {}", list.offset_of(0) == 0);

    for (position, is_open) in list.state_changes() {
        println!("  row {position}: open = {is_open}");
    }
    Ok(())
}

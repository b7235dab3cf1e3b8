use kdrange::{linear_range_search, random_points, BoundingBox, KdTree};
use std::time::Instant;

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // Usage: perf_check [count] [queries]
    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(1_000_000);
    let queries: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(100);

    let bounds = BoundingBox::new([-10000.0; 3], [10000.0; 3]);
    let data = random_points(count, &bounds, 42);

    let start = Instant::now();
    let tree = KdTree::build(data.clone());
    log::info!("Built tree of {} points (height {}) in {:?}", tree.len(), tree.height(), start.elapsed());

    // Boxes of growing size around the origin
    let boxes: Vec<BoundingBox<3>> = (1..=queries)
        .map(|i| {
            let half = 10000.0 * i as f64 / queries as f64;
            BoundingBox::new([-half; 3], [half; 3])
        })
        .collect();

    let start = Instant::now();
    let results = tree.query_batch(&boxes);
    log::info!("Answered {} queries in parallel in {:?}", boxes.len(), start.elapsed());

    let start = Instant::now();
    let mut mismatches = 0;
    for (b, result) in boxes.iter().zip(&results) {
        let mut expected = Vec::new();
        linear_range_search(&data, b.min, b.max, &mut expected);
        if expected.len() != result.len() {
            log::warn!("Box {:?}..{:?}: kd-tree found {}, linear scan {}", b.min, b.max, result.len(), expected.len());
            mismatches += 1;
        }
    }
    log::info!("Linear scan of {} queries took {:?}", boxes.len(), start.elapsed());

    if mismatches > 0 {
        log::error!("{} of {} queries disagree with the linear scan", mismatches, boxes.len());
        std::process::exit(1);
    }
}

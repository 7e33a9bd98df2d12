use ember::{Detection, MstClustering};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Minimal end-to-end: raw detections -> MST threshold cut -> fire events.
    //
    // Coordinates are longitude/latitude degrees, matching the feeds this
    // engine was built for; the default threshold of half a degree keeps
    // nearby hotspots and user reports on one marker.
    env_logger::init();

    let detections = vec![
        // Event near (24.9, 60.2): two satellite hotspots plus a report
        // filed from the same neighborhood.
        Detection::new("hotspot-101", vec![24.93, 60.17]),
        Detection::new("hotspot-102", vec![24.95, 60.18]),
        Detection::new("report-7", vec![24.91, 60.16]),
        // Event near (27.7, 62.9), including two reports pinned to the
        // exact same spot.
        Detection::new("hotspot-201", vec![27.68, 62.89]),
        Detection::new("report-8", vec![27.70, 62.90]),
        Detection::new("report-9", vec![27.70, 62.90]),
        // An isolated detection far from both.
        Detection::new("hotspot-301", vec![21.10, 65.40]),
    ];

    let engine = MstClustering::new();
    let clusters = engine.cluster(&detections)?;

    println!(
        "n_detections={} threshold={} events={}",
        detections.len(),
        engine.threshold(),
        clusters.len()
    );
    for (i, cluster) in clusters.iter().enumerate() {
        println!(
            "  event {}: center=({:.4}, {:.4}) members={:?}",
            i, cluster.center.x, cluster.center.y, cluster.member_ids
        );
    }

    Ok(())
}

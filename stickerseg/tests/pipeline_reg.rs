//! End-to-end sticker pipeline regression test
//!
//! Decodes a PNG, segments it, extracts every sticker and re-encodes it,
//! the way an editor hands stickers to a recognition service.
//!
//! Run with:
//! ```
//! cargo test -p stickerseg --test pipeline_reg
//! ```

use stickerseg::io::{decode_png, encode_png};
use stickerseg::region::{SegmentationOptions, extract_region, region_stats, segment};
use stickerseg_test::{RegParams, synth};

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");

    let mut scene = synth::transparent(120, 90).unwrap();
    synth::checker_rect(&mut scene, 5, 5, 40, 30, 255); // 1200
    synth::checker_rect(&mut scene, 60, 10, 25, 25, 200); // 625
    synth::checker_rect(&mut scene, 20, 50, 18, 18, 255); // 324
    synth::checker_rect(&mut scene, 100, 70, 8, 8, 255); // 64, dropped
    synth::checker_rect(&mut scene, 70, 60, 30, 20, 10); // below alpha threshold
    rp.write_image(&scene, "scene").unwrap();

    let bytes = encode_png(&scene).unwrap();
    let decoded = decode_png(&bytes).unwrap();
    rp.compare_images(&scene, &decoded);

    let regions = segment(&decoded.as_view(), &SegmentationOptions::default()).unwrap();
    let areas: Vec<u32> = regions.iter().map(|r| r.area).collect();
    assert_eq!(areas, vec![1200, 625, 324]);

    let stats = region_stats(&regions).unwrap();
    rp.compare_values(3.0, stats.count as f64, 0.0);
    rp.compare_values(2149.0, stats.total_area as f64, 0.0);
    rp.compare_values(716.0, stats.avg_area as f64, 0.0);

    for r in &regions {
        let sticker = extract_region(r, &decoded.as_view()).unwrap();
        rp.write_image(&sticker, &format!("sticker{}", r.id)).unwrap();
        let png = encode_png(&sticker).unwrap();
        let back = decode_png(&png).unwrap();
        rp.compare_images(&sticker, &back);
        rp.compare_values(r.area as f64, back.as_view().count_foreground(16) as f64, 0.0);
    }

    assert!(rp.cleanup(), "pipeline regression test failed");
}

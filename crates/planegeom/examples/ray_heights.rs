//! Height of a 3D ray above a set of vertical cut lines.
//!
//! Projects one ray onto the XZ and YZ planes, then asks each projection for
//! its height and ray parameter at a few cut positions. Also shows a
//! classified transform placing the cut positions.

use nalgebra::{Point3, Vector3};
use planegeom::geom2::ClassifiedAffine2;
use planegeom::geom3::Ray3;

fn main() {
    let ray = Ray3::new(Point3::new(0.0, 0.0, 1.0), Vector3::new(2.0, 1.0, 0.5));
    let xz = ray.to_xz();
    let yz = ray.to_yz();

    // cuts at 0..5 in local units, scaled and shifted into place
    let place = ClassifiedAffine2::scaling(0.5, 1.0).append(&ClassifiedAffine2::translation(1.0, 0.0));
    println!("placement: {place} ({:?})", place.kind());

    for k in 0..5 {
        let (cut, _) = place.transform_xy(k as f64, 0.0);
        let hx = xz.get_point(cut);
        let tx = xz.from_vertical_line(cut);
        let hy = yz.get_point(cut);
        let ty = yz.from_vertical_line(cut);
        println!(
            "cut {cut:>5.2}: xz z={:>7.4} t={:>7.4} | yz z={:>7.4} t={:>7.4}",
            hx.z, tx, hy.z, ty
        );
        assert!((xz.map_to_vertical_line(tx) - cut).abs() < 1e-9);
    }
}

// main.rs
//
// Writes a handful of ratchet gears to `stl/` so they can be inspected in a viewer.

use std::fs;

use ratchet_gear::{AddRatchet, Internality, RatchetParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure the /stls folder exists
    fs::create_dir_all("stl")?;

    // 1) default external wheel: 10 teeth, 4 vertices per tooth
    let wheel = AddRatchet::default().with_name("ratchet_external").execute()?;
    fs::write("stl/ratchet_external.stl", wheel.to_stl_ascii(&wheel.name))?;

    // 2) the same teeth pointing inward, as a pawl housing
    let crown = AddRatchet::new(RatchetParams::default().with_internality(Internality::Internal))
        .with_name("ratchet_internal")
        .execute()?;
    fs::write("stl/ratchet_internal.stl", crown.to_stl_ascii(&crown.name))?;

    // 3) coarse gear: minimum teeth and vertices per tooth
    let coarse = AddRatchet::new(
        RatchetParams::default()
            .with_num_teeth(3)
            .with_vert_per_tooth(2),
    )
    .with_name("ratchet_coarse")
    .execute()?;
    fs::write("stl/ratchet_coarse.stl", coarse.to_stl_binary()?)?;

    // 4) fine, wide gear placed off the origin and tipped on its side
    let placed = AddRatchet::new(
        RatchetParams::default()
            .with_num_teeth(36)
            .with_vert_per_tooth(8)
            .with_width(1.0),
    )
    .with_name("ratchet_placed")
    .with_location(3.0, 0.0, 1.0)
    .with_rotation(90.0, 0.0, 0.0)
    .execute()?;
    fs::write("stl/ratchet_placed.stl", placed.to_stl_binary()?)?;

    Ok(())
}

//! Diagnostic: build an angular dimension, drag its arc through every
//! quadrant and push it through a few transforms, printing the derived
//! geometry at each step.
//!
//! Run with `RUST_LOG=debug` to see role exchanges and rejected transforms.

use std::f64::consts::FRAC_PI_2;

use acad_dimension::entities::{AngularDimension2Line, AngularDimension3Point, Dimension, LineRef};
use acad_dimension::types::{Matrix3, Transform, Vector2, Vector3};
use acad_dimension::{DimStyle, DimensionBehavior, Entity, Line};
use anyhow::Context;

fn report(label: &str, dim: &AngularDimension2Line) -> anyhow::Result<()> {
    let center = dim.center_point().context("reference lines became parallel")?;
    println!(
        "  {label:<24} angle={:>8.3} ({}) offset={:>8.4} center={center} arc={} text={}",
        dim.measurement(),
        dim.measurement_text(),
        dim.offset(),
        dim.arc_definition_point(),
        dim.base.text_reference_point(),
    );
    println!(
        "  {:<24} first={} -> {}  second={} -> {}",
        "",
        dim.first_line().start,
        dim.first_line().end,
        dim.second_line().start,
        dim.second_line().end,
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Two-line angular dimension");
    let mut dim = AngularDimension2Line::new(
        LineRef::new(Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0)),
        LineRef::new(Vector2::new(0.0, 0.0), Vector2::new(0.0, 10.0)),
        2.5,
    )?;
    report("created", &dim)?;

    for (label, target) in [
        ("drag NE", Vector2::new(3.0, 3.0)),
        ("drag NW", Vector2::new(-3.0, 3.0)),
        ("drag SW", Vector2::new(-3.0, -3.0)),
        ("drag SE", Vector2::new(3.0, -3.0)),
    ] {
        dim.set_dimension_line_position(target)?;
        report(label, &dim)?;
    }

    dim.transform_by(&Matrix3::rotation_z(FRAC_PI_2), Vector3::new(5.0, 0.0, 0.0))?;
    report("rotated + moved", &dim)?;

    dim.transform_by(&Matrix3::rotation(Vector3::UNIT_X, FRAC_PI_2), Vector3::ZERO)?;
    println!("  plane normal after tilt: {}", dim.base.normal());
    report("tilted", &dim)?;

    match dim.transform_by(&Matrix3::scaling(1.0, 1.0, 0.0), Vector3::ZERO) {
        Ok(()) => report("flattened", &dim)?,
        Err(err) => println!("  flatten rejected: {err}"),
    }

    println!("\nFrom world lines");
    let first = Line::from_coords(0.0, 0.0, 4.0, 8.0, 0.0, 4.0);
    let second = Line::from_coords(0.0, 0.0, 4.0, 8.0, 8.0, 4.0);
    let world =
        AngularDimension2Line::from_lines(&first, &second, 3.0, Vector3::UNIT_Z, DimStyle::standard())?;
    println!("  elevation={}", world.base.elevation());
    report("created", &world)?;

    println!("\nThree-point angular dimension");
    let mut three = AngularDimension3Point::new(
        Vector2::ZERO,
        Vector2::new(4.0, 0.0),
        Vector2::new(0.0, 4.0),
        2.0,
        DimStyle::standard(),
    )?;
    println!("  created                  angle={:>8.3}", three.measurement());
    three.set_dimension_line_position(Vector2::new(-1.0, -1.0))?;
    println!(
        "  drag SW                  angle={:>8.3} arc={}",
        three.measurement(),
        three.arc_definition_point()
    );

    let mut entity: Dimension = three.into();
    entity.apply_transform(&Transform::from_scale(2.0))?;
    println!(
        "  {} scaled x2         angle={:>8.3}",
        entity.entity_type(),
        entity.measurement()
    );

    Ok(())
}

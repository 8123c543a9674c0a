//! Interactive design session.
//!
//! Prompts mirror the input tiers. Typing `restart` or `exit` at any text
//! prompt unwinds the session through [`Signal`].

use std::fmt::Display;
use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};
use mooring_core::inputs::{
    AnchorRow, BuoyRow, FullDetailInput, LineRow, LineTableInput, ShapeLevelInput,
};
use mooring_core::materials::{AnchorKind, LineMaterial, SoilType};
use mooring_core::system::{LoadDirection, MooringShape};
use mooring_core::{CostReport, DesignInput, DesignRules, PropertyDatabase};

/// Session control requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Restart,
    Exit,
}

type Step<T> = Result<T, Signal>;

/// Recognize the control keywords.
fn signal_for(answer: &str) -> Option<Signal> {
    match answer.trim().to_lowercase().as_str() {
        "restart" => Some(Signal::Restart),
        "exit" => Some(Signal::Exit),
        _ => None,
    }
}

/// Run sessions until the user exits. `emit` receives every finished report.
pub fn run<F>(db: &PropertyDatabase, rules: DesignRules, mut emit: F) -> anyhow::Result<()>
where
    F: FnMut(&CostReport) -> anyhow::Result<()>,
{
    println!("Mooring cost estimator");
    println!("Type 'restart' at any prompt to start over, or 'exit' to quit.");
    println!();

    loop {
        let design = match collect_design() {
            Ok(design) => design,
            Err(Signal::Restart) => {
                println!("Restarting...");
                continue;
            }
            Err(Signal::Exit) => return Ok(()),
        };

        match mooring_core::evaluate(db, &design, rules) {
            Ok(report) => emit(&report)?,
            Err(e) => eprintln!("Error: {}", e),
        }

        if !confirm("Start again?")? {
            return Ok(());
        }
    }
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(true).interact()?)
}

// ============================================================================
// Tiers
// ============================================================================

fn collect_design() -> Step<DesignInput> {
    const LEVELS: [&str; 5] = [
        "Reference design",
        "1: mooring library (shape level)",
        "2: line data",
        "3: full mooring data",
        "Exit",
    ];
    let level = Select::new()
        .with_prompt("Level of input")
        .items(&LEVELS)
        .default(1)
        .interact()
        .map_err(|_| Signal::Exit)?;

    match level {
        0 => Ok(DesignInput::Reference),
        1 => shape_level().map(DesignInput::ShapeLevel),
        2 => line_table().map(DesignInput::LineTable),
        3 => full_detail().map(DesignInput::FullDetail),
        _ => Err(Signal::Exit),
    }
}

fn shape_level() -> Step<ShapeLevelInput> {
    let depth_m = number("Depth (m)")?;
    let buoys = buoys()?;
    let shape = keyword(
        &format!("Mooring configuration ({})", choices(&MooringShape::ALL)),
        Some("catenary"),
        MooringShape::from_str_flexible,
    )?;
    let design_load_kn = number("Design load (kN)")?;
    let soil = soil(Some("sand"))?;
    let inflation_scale = inflation()?;
    Ok(ShapeLevelInput {
        shape,
        depth_m,
        design_load_kn,
        soil,
        buoys,
        inflation_scale,
    })
}

fn line_table() -> Step<LineTableInput> {
    let depth_m = number("Depth (m)")?;
    let buoys = buoys()?;
    let rows = count("How many different line types are in your design?")?;
    let mut lines = Vec::new();
    for row in 1..=rows {
        println!("\n   Line type {}:", row);
        lines.push(line_row(true)?);
    }
    let soil = soil(None)?;
    let inflation_scale = inflation()?;
    Ok(LineTableInput {
        depth_m,
        soil,
        lines,
        buoys,
        inflation_scale,
    })
}

fn full_detail() -> Step<FullDetailInput> {
    let depth_m = number("Depth (m)")?;
    let buoys = buoys()?;

    let rows = count("How many different line types are in your design?")?;
    let mut lines = Vec::new();
    for row in 1..=rows {
        println!("\n   Line type {}:", row);
        lines.push(line_row(false)?);
    }

    let rows = count("How many different anchor types are in your design?")?;
    let mut anchors = Vec::new();
    for row in 1..=rows {
        println!("\n   Anchor type {}:", row);
        anchors.push(anchor_row()?);
    }

    let inflation_scale = inflation()?;
    Ok(FullDetailInput {
        depth_m,
        lines,
        anchors,
        buoys,
        inflation_scale,
    })
}

// ============================================================================
// Tables
// ============================================================================

fn buoys() -> Step<Vec<BuoyRow>> {
    let rows = count("How many different buoy sizes are in your design? (no buoys = 0)")?;
    let mut buoys = Vec::new();
    for row in 1..=rows {
        println!("\n   Buoy size {}:", row);
        buoys.push(BuoyRow {
            count: count("      Number of these buoys")?,
            buoyancy_kn: number("      Buoyancy (kN)")?,
        });
    }
    Ok(buoys)
}

/// One line-table row; anchors are only asked for when they will be inferred.
fn line_row(with_anchors: bool) -> Step<LineRow> {
    let count_ = count("      Number of these lines")?;
    let material = keyword(
        &format!("      Line material ({})", choices(&LineMaterial::ALL)),
        None,
        LineMaterial::from_str_flexible,
    )?;
    let diameter_m = number("      Diameter (m)")?;
    let length_m = number("      Length (m)")?;
    let fos = optional_number("      Factor of safety (blank for default)")?;
    let (anchor_load_direction, anchors_per_line) = if with_anchors {
        (
            keyword(
                &format!("      Anchor load direction ({})", choices(&LoadDirection::ALL)),
                Some("horizontal"),
                LoadDirection::from_str_flexible,
            )?,
            count("      Number of anchors per line")?,
        )
    } else {
        (LoadDirection::None, 0)
    };
    let connections_per_line = count("      Number of connections per line")?;
    Ok(LineRow {
        count: count_,
        material,
        diameter_m,
        fos,
        length_m,
        anchor_load_direction,
        anchors_per_line,
        connections_per_line,
    })
}

fn anchor_row() -> Step<AnchorRow> {
    let count_ = count("      Number of these anchors")?;
    let kind = keyword(
        &format!("      Anchor type ({})", choices(&AnchorKind::ALL)),
        None,
        AnchorKind::from_str_flexible,
    )?;
    let mass_kg = number("      Mass (kg)")?;
    let area_m2 = if kind.uses_area() {
        Some(number("      Fluke area (m2)")?)
    } else {
        None
    };
    let soil = soil(None)?;
    Ok(AnchorRow {
        count: count_,
        kind,
        mass_kg,
        area_m2,
        soil,
    })
}

// ============================================================================
// Prompts
// ============================================================================

/// Comma-separated keywords for a prompt.
fn choices<T: Display>(options: &[T]) -> String {
    options.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

fn soil(default: Option<&str>) -> Step<SoilType> {
    keyword(
        &format!("Soil type ({})", choices(&SoilType::ALL)),
        default,
        SoilType::from_str_flexible,
    )
}

fn inflation() -> Step<f64> {
    loop {
        let answer = text("Inflation scale from 2024$", Some("1.0"))?;
        match answer.trim().parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid response, must be a number. Try again"),
        }
    }
}

/// Read a line of text, intercepting `restart` and `exit`.
fn text(prompt: &str, default: Option<&str>) -> Step<String> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    let answer = input.interact_text().map_err(|_| Signal::Exit)?;
    match signal_for(&answer) {
        Some(signal) => Err(signal),
        None => Ok(answer),
    }
}

fn parsed<T>(prompt: &str, default: Option<&str>, kind: &str) -> Step<T>
where
    T: FromStr,
{
    loop {
        let answer = text(prompt, default)?;
        match answer.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid response, must be {}. Try again", kind),
        }
    }
}

fn number(prompt: &str) -> Step<f64> {
    parsed(prompt, None, "a number")
}

fn count(prompt: &str) -> Step<u32> {
    parsed(prompt, None, "a whole number")
}

fn optional_number(prompt: &str) -> Step<Option<f64>> {
    loop {
        let answer = text(prompt, Some(""))?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        match answer.parse::<f64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Invalid response, must be a number or blank. Try again"),
        }
    }
}

/// Prompt until `parse` accepts the answer.
fn keyword<T, E>(prompt: &str, default: Option<&str>, parse: fn(&str) -> Result<T, E>) -> Step<T>
where
    E: Display,
{
    loop {
        let answer = text(prompt, default)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(e) => println!("{}. Try again", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mooring_core::MooringResult;

    fn check_keyword<T>(answer: &str, parse: fn(&str) -> MooringResult<T>) -> Step<MooringResult<T>> {
        match signal_for(answer) {
            Some(signal) => Err(signal),
            None => Ok(parse(answer)),
        }
    }

    #[test]
    fn test_choices_parse_back() {
        let listed = choices(&MooringShape::ALL);
        assert_eq!(listed, "catenary, semi-taut, taut, tension");
        for keyword in listed.split(", ") {
            assert!(MooringShape::from_str_flexible(keyword).is_ok());
        }
        for keyword in choices(&AnchorKind::ALL).split(", ") {
            assert!(AnchorKind::from_str_flexible(keyword).is_ok());
        }
    }

    #[test]
    fn test_signals() {
        assert_eq!(signal_for("restart"), Some(Signal::Restart));
        assert_eq!(signal_for("  EXIT "), Some(Signal::Exit));
        assert_eq!(signal_for("catenary"), None);
    }

    #[test]
    fn test_keyword_answers() {
        assert_eq!(
            check_keyword("semi-taut", MooringShape::from_str_flexible),
            Ok(Ok(MooringShape::SemiTaut))
        );
        assert_eq!(
            check_keyword("exit", LineMaterial::from_str_flexible),
            Err(Signal::Exit)
        );
        assert!(matches!(
            check_keyword("kevlar", LineMaterial::from_str_flexible),
            Ok(Err(_))
        ));
    }
}

//! # Mabani CLI
//!
//! Terminal front end for the material estimation engine: pick a
//! calculator, enter the fields, get a bill of quantities with its JSON,
//! and optionally append it to a local history file. A `chat` mode runs
//! the keyword FAQ assistant.

mod assistant;

use std::io::{self, BufRead, Write};
use std::path::Path;

use estimate_core::catalog::{
    BrickType, Catalog, ElementKind, InstallMethod, RenderType, SlabSystem, TileSize,
    WasteAllowance,
};
use estimate_core::estimators::{
    CeilingInput, ElementInput, EstimateItem, FlooringInput, RenderInput, WallInput,
};
use estimate_core::history::{load_log, save_log, EstimateLog};
use estimate_core::MaterialBill;

use assistant::Assistant;

const HISTORY_FILE: &str = "estimates.json";

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    let input = prompt_line(&format!("{} [{}]: ", prompt, default));
    // A blank or unparsable field becomes NaN for the validator to reject,
    // an empty field takes the default
    if input.is_empty() {
        default
    } else {
        input.parse().unwrap_or(f64::NAN)
    }
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    let input = prompt_line(&format!("{} [{}]: ", prompt, default));
    if input.is_empty() {
        default
    } else {
        input.parse().unwrap_or(0)
    }
}

fn main() {
    println!("Mabani - Construction Material Estimator");
    println!("========================================");

    let catalog = Catalog::builtin();

    loop {
        println!();
        println!("  1) Ceiling / slab");
        println!("  2) Masonry wall");
        println!("  3) Render / plaster");
        println!("  4) Tile flooring");
        println!("  5) Columns / foundations / beams");
        println!("  6) Chat with the assistant");
        println!("  7) Show saved estimates");
        println!("  q) Quit");

        let choice = prompt_line("> ");
        let item = match choice.as_str() {
            "1" => read_ceiling(),
            "2" => read_wall(),
            "3" => read_render(),
            "4" => read_flooring(),
            "5" => read_element(),
            "6" => {
                run_chat();
                continue;
            }
            "7" => {
                show_history();
                continue;
            }
            "q" | "quit" | "exit" => break,
            _ => {
                println!("Unknown choice: {}", choice);
                continue;
            }
        };

        let item = match item {
            Some(item) => item,
            None => continue,
        };

        match item.estimate(catalog) {
            Ok(bill) => {
                print_bill(&item, &bill);
                maybe_save(item, bill);
            }
            Err(e) => {
                println!();
                println!("Error: {}", e);
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    println!("{}", json);
                }
            }
        }
    }
}

fn read_ceiling() -> Option<EstimateItem> {
    let system = pick("Slab system", &SlabSystem::ALL)?;
    Some(EstimateItem::Ceiling(CeilingInput {
        label: prompt_line("Label: "),
        length_m: prompt_f64("Length (m)", 4.0),
        width_m: prompt_f64("Width (m)", 3.0),
        thickness_cm: prompt_f64("Thickness (cm)", 15.0),
        system,
    }))
}

fn read_wall() -> Option<EstimateItem> {
    let brick = pick("Unit type", &BrickType::ALL)?;
    Some(EstimateItem::Wall(WallInput {
        label: prompt_line("Label: "),
        area_m2: prompt_f64("Wall area (m²)", 50.0),
        brick,
        thickness_cm: prompt_f64("Wall thickness (cm)", 12.0),
    }))
}

fn read_render() -> Option<EstimateItem> {
    let render = pick("Render type", &RenderType::ALL)?;
    Some(EstimateItem::Render(RenderInput {
        label: prompt_line("Label: "),
        area_m2: prompt_f64("Area (m²)", 100.0),
        thickness_cm: prompt_f64("Thickness (cm)", 2.0),
        render,
    }))
}

fn read_flooring() -> Option<EstimateItem> {
    let tile = pick("Tile size", &TileSize::ALL)?;
    let waste = pick("Waste allowance", &WasteAllowance::ALL)?;
    let method = pick("Install method", &InstallMethod::ALL)?;
    Some(EstimateItem::Flooring(FlooringInput {
        label: prompt_line("Label: "),
        area_m2: prompt_f64("Floor area (m²)", 30.0),
        tile,
        waste,
        method,
    }))
}

fn read_element() -> Option<EstimateItem> {
    let kind = pick("Element kind", &ElementKind::ALL)?;
    Some(EstimateItem::Element(ElementInput {
        label: prompt_line("Label: "),
        kind,
        length_m: prompt_f64("Section length (m)", 0.3),
        width_m: prompt_f64("Section width (m)", 0.3),
        height_m: prompt_f64("Height (m)", 3.0),
        count: prompt_u32("Count", 1),
    }))
}

/// Present a numbered selector over a closed variant list.
fn pick<T: Copy + std::fmt::Display>(prompt: &str, options: &[T]) -> Option<T> {
    println!("{}:", prompt);
    for (i, option) in options.iter().enumerate() {
        println!("  {}) {}", i + 1, option);
    }
    let input = prompt_line("> ");
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= options.len() => Some(options[n - 1]),
        _ => {
            println!("Pick a number between 1 and {}", options.len());
            None
        }
    }
}

fn print_bill(item: &EstimateItem, bill: &MaterialBill) {
    println!();
    println!("=======================================");
    println!("  {} ESTIMATE", item.category().to_uppercase());
    println!("=======================================");

    let line = |label: &str, value: Option<String>| {
        if let Some(value) = value {
            println!("  {:<18} {}", label, value);
        }
    };

    line("Area:", bill.area_m2.map(|v| format!("{:.2} m²", v)));
    line("Volume:", bill.volume_m3.map(|v| format!("{:.2} m³", v)));
    line("Concrete:", bill.concrete_m3.map(|v| format!("{:.2} m³ (waste incl.)", v)));
    line("Cement:", bill.cement_bags.map(|v| format!("{} bags", v)));
    line("Sand:", bill.sand_m3.map(|v| format!("{} m³", v)));
    line("Aggregate:", bill.gravel_m3.map(|v| format!("{} m³", v)));
    line("Water:", bill.water_liters.map(|v| format!("{} L", v)));
    line("Steel:", bill.steel_kg.map(|v| format!("{:.1} kg", v)));
    line("Steel rods:", bill.steel_rods.map(|v| format!("{} rods (12 m)", v)));
    line("Units:", bill.units.map(|v| format!("{} pieces", v)));
    line("Tiles:", bill.tiles.map(|v| format!("{} pieces", v)));
    line("Boxes:", bill.boxes.map(|v| format!("{} boxes", v)));
    line("Adhesive:", bill.adhesive_kg.map(|v| format!("{} kg", v)));
    line("Additive:", bill.additive_kg.map(|v| format!("{} kg", v)));
    println!("  {:<18} {:.2} EGP (approximate)", "Cost:", bill.cost);
    println!("=======================================");

    if let Ok(json) = serde_json::to_string_pretty(bill) {
        println!();
        println!("JSON:");
        println!("{}", json);
    }
}

fn maybe_save(item: EstimateItem, bill: MaterialBill) {
    let answer = prompt_line("Save this estimate? [y/N]: ");
    if !answer.eq_ignore_ascii_case("y") {
        return;
    }

    let path = Path::new(HISTORY_FILE);
    let mut log = if path.exists() {
        match load_log(path) {
            Ok(log) => log,
            Err(e) => {
                println!("Could not read {}: {}", HISTORY_FILE, e);
                return;
            }
        }
    } else {
        EstimateLog::default()
    };

    log.add(item, bill);
    match save_log(&log, path) {
        Ok(()) => println!("Saved to {} ({} entries)", HISTORY_FILE, log.len()),
        Err(e) => println!("Could not save: {}", e),
    }
}

fn show_history() {
    let path = Path::new(HISTORY_FILE);
    if !path.exists() {
        println!("No saved estimates yet.");
        return;
    }

    match load_log(path) {
        Ok(log) => {
            for entry in &log.entries {
                println!(
                    "  {}  {:<10} {:<20} {:>10.2} EGP  ({})",
                    entry.saved_at.format("%Y-%m-%d %H:%M"),
                    entry.category,
                    entry.label,
                    entry.bill.cost,
                    entry.id,
                );
            }
        }
        Err(e) => println!("Could not read {}: {}", HISTORY_FILE, e),
    }
}

fn run_chat() {
    println!("Assistant ready. Empty line to go back.");
    let mut assistant = Assistant::new();
    loop {
        let message = prompt_line("you> ");
        if message.is_empty() {
            break;
        }
        println!("bot> {}", assistant.reply(&message));
    }
}

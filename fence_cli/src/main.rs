//! # Fence Takeoff CLI
//!
//! Prompt-driven front end for `fence_core`.
//!
//! ```text
//! fence_cli                  # answer prompts
//! fence_cli backyard.fence   # compute a saved project
//! RUST_LOG=debug fence_cli   # show engine logs
//! ```

use std::io::{self, BufRead, Write};
use std::path::Path;

use fence_core::export::summary_text;
use fence_core::materials::MaterialKind;
use fence_core::project::GateSpec;
use fence_core::{compute_fence_project, load_project, FenceResult, ProjectSpec};
use tracing_subscriber::EnvFilter;

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn prompt_parse<T: std::str::FromStr>(prompt: &str, default: T) -> T {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_material() -> MaterialKind {
    for (i, kind) in MaterialKind::ALL.iter().enumerate() {
        println!("  {}) {}", i + 1, kind);
    }
    let choice: usize = prompt_parse("Material [1]: ", 1);
    MaterialKind::ALL
        .get(choice.saturating_sub(1))
        .copied()
        .unwrap_or(MaterialKind::Wood)
}

fn spec_from_prompts() -> ProjectSpec {
    let kind = prompt_material();
    let length_ft = prompt_parse("Fence length (ft) [150]: ", 150.0);
    let default_height = 6;
    let height_ft = prompt_parse(&format!("Height (ft) [{}]: ", default_height), default_height);

    let mut spec = ProjectSpec::for_material(kind, length_ft, height_ft);
    spec.walk_gates = GateSpec::new(prompt_parse("Walk gates [0]: ", 0), spec.walk_gates.width_ft);
    spec.drive_gates = GateSpec::new(prompt_parse("Drive gates [0]: ", 0), spec.drive_gates.width_ft);
    spec.corners = prompt_parse("Corners [0]: ", 0);
    spec.end_posts = prompt_parse("End posts [0]: ", 0);
    spec.waste_buffer = prompt_parse("Add 10% waste buffer? (true/false) [true]: ", true);
    spec
}

fn load_spec(path: &Path) -> FenceResult<ProjectSpec> {
    let project = load_project(path)?;
    println!("Project: {} ({})", project.meta.name, project.meta.customer);
    Ok(project.spec)
}

fn run() -> FenceResult<()> {
    let spec = match std::env::args().nth(1) {
        Some(path) => load_spec(Path::new(&path))?,
        None => spec_from_prompts(),
    };

    let takeoff = compute_fence_project(&spec)?;

    println!();
    println!("═══════════════════════════════════════");
    println!("  FENCE TAKEOFF");
    println!("═══════════════════════════════════════");
    println!("{}", summary_text(&spec, &takeoff));
    println!();
    println!("JSON Output:");
    println!("{}", serde_json::to_string_pretty(&takeoff)?);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    println!("Fence Takeoff - Materials and Cost Estimator");
    println!("============================================");
    println!();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}

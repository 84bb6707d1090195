use std::fs;
use std::path::PathBuf;

use flow_map::api::{FlowMapConfig, FlowMapView, StaticDirFetcher};
use flow_map::render::NullRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Contract,
    LayerLibrary,
}

#[derive(Debug)]
struct CliArgs {
    config_path: Option<PathBuf>,
    static_dir: PathBuf,
    ticks: u64,
    format: OutputFormat,
}

fn main() {
    let _ = flow_map::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            FlowMapConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => FlowMapConfig::default(),
    };

    let fetcher = StaticDirFetcher::new(
        args.static_dir.clone(),
        config.data_source.base_path.clone(),
    );
    let mut view =
        FlowMapView::new(NullRenderer::default(), config).map_err(|e| e.to_string())?;
    // A failed load still yields an empty scene, matching the running view.
    view.load_blocking(&fetcher).map_err(|e| e.to_string())?;
    view.mount().map_err(|e| e.to_string())?;
    for _ in 0..args.ticks {
        view.on_frame().map_err(|e| e.to_string())?;
    }

    let output = match args.format {
        OutputFormat::Contract => view.scene_json_contract_v1_pretty(),
        OutputFormat::LayerLibrary => view.layer_library_json_pretty(),
    }
    .map_err(|e| e.to_string())?;
    view.unmount();

    println!("{output}");
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut config_path: Option<PathBuf> = None;
    let mut static_dir = PathBuf::from("public");
    let mut ticks = 0u64;
    let mut format = OutputFormat::LayerLibrary;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--static-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --static-dir".to_owned())?;
                static_dir = PathBuf::from(value);
            }
            "--ticks" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --ticks".to_owned())?;
                ticks = value
                    .parse()
                    .map_err(|err| format!("invalid --ticks `{value}`: {err}"))?;
            }
            "--format" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --format".to_owned())?;
                format = match value.as_str() {
                    "contract" => OutputFormat::Contract,
                    "layers" => OutputFormat::LayerLibrary,
                    other => return Err(format!("unknown format `{other}`")),
                };
            }
            "-h" | "--help" => {
                println!(
                    "Usage: flow-map-scene [--config <path>] [--static-dir <dir>] [--ticks <n>] [--format layers|contract]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        config_path,
        static_dir,
        ticks,
        format,
    })
}

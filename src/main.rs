use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use taskvise::config::AppConfig;
use taskvise::error::AppError;
use taskvise::telemetry;
use taskvise::workforce::analytics::{
    analytics_router, AnalyticsConfig, GapFilter, GapReport, GapSeverity, GapSnapshot,
    InMemoryRoster, ProjectId, RosterProvider, SkillGapService,
};
use taskvise::workforce::hris::CsvRosterSource;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "TaskVise Workforce Analytics",
    about = "Run the TaskVise analytics service and skill-gap reports from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Compute skill-gap reports without starting the service
    SkillGaps {
        #[command(subcommand)]
        command: SkillGapsCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum SkillGapsCommand {
    /// Compute the current gap set and render a summary to stdout
    Report(ReportArgs),
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// HRIS employee export (CSV); defaults to the built-in demo roster
    #[arg(long, requires = "projects_csv")]
    employees_csv: Option<PathBuf>,
    /// HRIS project export (CSV)
    #[arg(long, requires = "employees_csv")]
    projects_csv: Option<PathBuf>,
    /// Case-insensitive search over project names and skills
    #[arg(long)]
    search: Option<String>,
    /// Restrict the report to one project id
    #[arg(long)]
    project: Option<String>,
    /// Restrict the report to one severity (low, medium, high)
    #[arg(long, value_parser = parse_severity)]
    severity: Option<GapSeverity>,
    /// Restrict the report to one department
    #[arg(long)]
    department: Option<String>,
    /// Include the full per-project gap listing in the output
    #[arg(long)]
    list_gaps: bool,
}

impl ReportArgs {
    fn filter(&self) -> GapFilter {
        GapFilter {
            search: self.search.clone(),
            project: self.project.clone().map(ProjectId),
            severity: self.severity,
            department: self.department.clone(),
        }
    }
}

fn parse_severity(raw: &str) -> Result<GapSeverity, String> {
    raw.parse::<GapSeverity>().map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::SkillGaps {
            command: SkillGapsCommand::Report(args),
        } => run_skill_gap_report(args).await,
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let analytics = match config.roster.sources() {
        Some((employees_csv, projects_csv)) => {
            info!(?employees_csv, ?projects_csv, "serving gaps from HRIS csv exports");
            let provider = Arc::new(CsvRosterSource::new(
                employees_csv.to_path_buf(),
                projects_csv.to_path_buf(),
            ));
            analytics_router(Arc::new(SkillGapService::new(
                provider,
                AnalyticsConfig::default(),
            )))
        }
        None => {
            info!("no roster source configured; serving the built-in demo roster");
            let provider = Arc::new(InMemoryRoster::demo());
            analytics_router(Arc::new(SkillGapService::new(
                provider,
                AnalyticsConfig::default(),
            )))
        }
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(analytics)
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "workforce analytics service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn run_skill_gap_report(args: ReportArgs) -> Result<(), AppError> {
    let filter = args.filter();
    let config = AnalyticsConfig::default();

    let snapshot = match (args.employees_csv, args.projects_csv) {
        (Some(employees_csv), Some(projects_csv)) => {
            let provider = Arc::new(CsvRosterSource::new(employees_csv, projects_csv));
            fetch_snapshot(provider, &config).await?
        }
        _ => {
            let provider = Arc::new(InMemoryRoster::demo());
            fetch_snapshot(provider, &config).await?
        }
    };

    render_skill_gap_report(&snapshot, &filter, &config, args.list_gaps);
    Ok(())
}

async fn fetch_snapshot<P>(
    provider: Arc<P>,
    config: &AnalyticsConfig,
) -> Result<GapSnapshot, AppError>
where
    P: RosterProvider + 'static,
{
    let service = SkillGapService::new(provider, config.clone());
    Ok(service.snapshot().await?)
}

fn render_skill_gap_report(
    snapshot: &GapSnapshot,
    filter: &GapFilter,
    config: &AnalyticsConfig,
    list_gaps: bool,
) {
    let gaps = snapshot.filtered(filter);
    let report = GapReport::new(&gaps, config);
    let summary = report.summary();

    println!("TaskVise skill-gap report");
    println!(
        "Roster: {} employee(s), {} project(s); {} project(s) in scope after filters",
        snapshot.employees.len(),
        snapshot.projects.len(),
        gaps.len()
    );
    println!("Generated: {}", snapshot.generated_at.format("%Y-%m-%d %H:%M:%S UTC"));

    println!("\nSeverity breakdown");
    for entry in &summary.severity_counts {
        println!("- {}: {} project(s)", entry.severity_label, entry.projects);
    }

    println!("\nStaffing outlook");
    for entry in &summary.staffing_counts {
        println!(
            "- {}: {} project(s)",
            entry.recommendation_label, entry.projects
        );
    }

    if summary.critical_gaps.is_empty() {
        println!("\nCritical gaps: none");
    } else {
        println!("\nCritical gaps");
        for gap in &summary.critical_gaps {
            println!(
                "- {} ({}% match), missing: {}",
                gap.project_name,
                gap.match_percentage,
                gap.missing_skills.join(", ")
            );
        }
    }

    if !summary.observations.is_empty() {
        println!("\nObservations");
        for observation in &summary.observations {
            println!("- {}", observation);
        }
    }

    if !summary.recommended_actions.is_empty() {
        println!("\nRecommended actions");
        for action in &summary.recommended_actions {
            println!("- {}", action);
        }
    }

    if list_gaps {
        println!("\nGap breakdown by project");
        let response = report.response(snapshot.generated_at);
        for gap in &response.gaps {
            println!(
                "- {} | {} | severity {} | match {}% | staffed {}/{} | missing: {}",
                gap.project_id.0,
                gap.project_name,
                gap.severity_label,
                gap.match_percentage,
                gap.employees_with_skills,
                gap.total_employees_needed,
                if gap.missing_skills.is_empty() {
                    "none".to_string()
                } else {
                    gap.missing_skills.join(", ")
                }
            );
        }
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

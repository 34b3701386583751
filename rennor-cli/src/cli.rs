use anyhow::bail;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rennor_core::{
    Config, HttpBackend, PredictionSession, RequestState, model::ForecastResult, present,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "rennor", version, about = "Cliente RENNOR: predicción de humedad relativa")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Request a multi-day humidity forecast and print it.
    Predict {
        /// Number of future days (1-30); prompted interactively if omitted.
        days: Option<String>,

        /// Override the service base URL for this invocation.
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Check that the prediction service is reachable.
    Health {
        /// Override the service base URL for this invocation.
        #[arg(long)]
        base_url: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Predict { days, base_url } => predict(days, base_url).await,
            Command::Health { base_url } => health(base_url).await,
        }
    }
}

fn backend_for(base_url: Option<String>) -> HttpBackend {
    match base_url {
        Some(base_url) => HttpBackend::with_config(Config { base_url }),
        None => HttpBackend::new(),
    }
}

async fn predict(days: Option<String>, base_url: Option<String>) -> anyhow::Result<()> {
    let days = match days {
        Some(days) => days,
        None => inquire::Text::new("Días a predecir:").with_default("7").prompt()?,
    };

    let mut session = PredictionSession::new(Box::new(backend_for(base_url)));
    session.submit(&days).await;

    match session.state() {
        RequestState::Success(result) => {
            render_forecast(result);
            Ok(())
        }
        RequestState::Error { message, .. } => bail!("{message}"),
        // submit() always resolves to Success or Error.
        state => bail!("estado inesperado: {state:?}"),
    }
}

async fn health(base_url: Option<String>) -> anyhow::Result<()> {
    let health = backend_for(base_url).health().await?;

    println!("Servicio: {}", health.service);
    println!("Estado:   {}", health.status);
    if let Some(timestamp) = &health.timestamp {
        println!("Hora:     {timestamp}");
    }

    Ok(())
}

fn render_forecast(result: &ForecastResult) {
    let series = present::chart_series(result);
    if series.is_empty() {
        println!("El servicio no devolvió predicciones.");
        return;
    }

    println!("Predicción de humedad relativa ({} días):", series.len());
    for point in &series {
        let date = result
            .forecast_dates
            .get(point.day as usize - 1)
            .map(|d| format_date(d))
            .unwrap_or_default();

        println!(
            "  Día {:>2} {:>6}  {:>6.2}%  {}",
            point.day,
            date,
            point.humidity,
            bar(point.humidity)
        );
    }

    if let Some(stats) = present::summary_stats(&result.predictions) {
        println!();
        println!(
            "  Promedio: {:.2}%   Máximo: {:.2}%   Mínimo: {:.2}%",
            stats.mean, stats.max, stats.min
        );
    }

    if let Some(metrics) = &result.metrics {
        println!();
        println!("Métricas del modelo:");
        println!(
            "  MSE: {:.2}   RMSE: {:.2}   MAE: {:.2}   R²: {:.1}%",
            metrics.mse,
            metrics.rmse,
            metrics.mae,
            metrics.r_squared * 100.0
        );
    }

    if let Some(comparison) = &result.comparison {
        println!();
        println!("Comparación histórica (real vs. predicho):");
        for point in present::comparison_points(comparison) {
            println!(
                "  {}  real: {}  predicho: {}",
                point.date,
                format_value(point.actual),
                format_value(point.predicted)
            );
        }
    }

    if let Some(generated_at) = result.generated_at {
        println!();
        println!("Generado: {}", generated_at.format("%Y-%m-%d %H:%M:%S"));
    }
}

/// Compact day/month label for chart rows; unparseable dates pass through.
fn format_date(raw: &str) -> String {
    raw.parse::<NaiveDate>()
        .map_or_else(|_| raw.to_string(), |date| date.format("%d/%m").to_string())
}

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}%"))
}

fn bar(humidity: f64) -> String {
    let width = (humidity / 2.5).clamp(0.0, 40.0) as usize;
    "█".repeat(width)
}

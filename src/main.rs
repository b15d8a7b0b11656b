use clap::Parser;
use clientes_crud::utils::error::{CrudError, ErrorSeverity};
use clientes_crud::utils::logger;
use clientes_crud::{CliConfig, Console, HttpCustomerApi, Session};
use std::io::{self, BufReader};

fn report_and_exit(stage: &str, e: &CrudError) -> ! {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 設定錯誤時日誌尚未初始化，直接輸出到 stderr
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if settings.json_logs {
        logger::init_json_logger(settings.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    }
    tracing::debug!("Settings: {:?}", settings);

    let api = match HttpCustomerApi::from_config(&settings) {
        Ok(api) => api,
        Err(e) => report_and_exit("Client setup", &e),
    };
    tracing::info!("Using customer API at {}", api.base_url());

    let console = Console::new(BufReader::new(io::stdin()), io::stdout());
    let mut session = Session::new(api, &console);

    if let Err(e) = session.run().await {
        report_and_exit("Session", &e);
    }

    Ok(())
}

// ABOUTME: Main entry point for kitty-zoxide-sessions
// Parses flags, sets up logging, and runs one launcher operation to completion

use clap::Parser;
use kitty_zoxide_sessions::cleanup::LauncherWindowGuard;
use kitty_zoxide_sessions::cli::Args;
use kitty_zoxide_sessions::config::{self, AppContext, FileConfig, APP_NAME};
use kitty_zoxide_sessions::console::Console;
use kitty_zoxide_sessions::error::{LauncherError, EXIT_FAILURE, EXIT_SUCCESS};
use kitty_zoxide_sessions::gateway::SystemGateway;
use kitty_zoxide_sessions::logging::{self, LogHandle};
use kitty_zoxide_sessions::operations::{self, Operation};
use tracing::info;

fn main() {
    // process::exit skips destructors, so everything that must drop lives inside run().
    std::process::exit(run());
}

fn run() -> i32 {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { EXIT_FAILURE } else { EXIT_SUCCESS };
        }
    };

    // Validate before touching the filesystem or spawning anything.
    let operation = match Operation::from_args(&args) {
        Ok(operation) => operation,
        Err(e) => return fail(&e, &Console::stdio(LogHandle::disabled())),
    };

    let file_config = match FileConfig::load() {
        Ok(file_config) => file_config,
        Err(e) => return fail(&LauncherError::Config(e), &Console::stdio(LogHandle::disabled())),
    };

    let session_dir = config::resolve_session_dir();
    let log = logging::init(&session_dir, args.debug);
    info!("{} {} started ({:?})", APP_NAME, env!("CARGO_PKG_VERSION"), operation);

    let ctx = AppContext::new(&args, file_config, session_dir, config::launcher_window_id());
    let gateway = SystemGateway::from_env(ctx.editor.clone());
    let console = Console::stdio(log);

    let _close_launcher = ctx
        .launcher_window_id
        .as_deref()
        .map(|id| LauncherWindowGuard::new(&gateway, id));

    let code = operations::dispatch(operation, &ctx, &gateway, &console);
    info!("Exiting with code {}", code);
    code
}

fn fail(err: &LauncherError, console: &Console) -> i32 {
    operations::report(err, console);
    err.exit_code()
}

//! Waifu-Roller: send a bot command to a Discord channel a fixed number of
//! times, with global pause and abort hotkeys.

mod app;
mod cli;
mod config;
mod console;
mod error;
mod hotkey_handler;
mod keystrokes;
mod loop_command;
mod modifier_key_guard;
mod platform;
mod prompt;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    cli::Cli,
    console::ConsoleReporter,
    error::{AppError, Result as AppResult},
    hotkey_handler::{HotkeyHandler, HotkeyIds},
    keystrokes::EnigoKeystrokes,
    loop_command::LoopCommand,
    modifier_key_guard::ModifierKeyGuard,
};

use crate::{app::EXIT_FAILURE, config::Config, platform::ShellLauncher};

use std::sync::Arc;

use clap::Parser;
use global_hotkey::GlobalHotKeyManager;
use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::watch;
use tracing::error;
use tracing_subscriber::EnvFilter;
use waifu_roller_core::{
    AbortController, ActionRequest, Keystrokes, Launcher, PauseController, SessionCell,
    StatusSink, TargetApp, Timings, WindowLocator, WindowSystem,
};

const DEFAULT_LOG_FILTER: &str = "waifu_roller=info,waifu_roller_core=info";

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.config {
        match Config::config_path() {
            Ok(path) => {
                println!("{}", path.display());
                std::process::exit(0);
            }
            Err(e) => fail("Failed to locate config", e),
        }
    }

    let config = Config::load().unwrap_or_else(|e| fail("Failed to load config", e));
    let request = cli
        .into_request(&config)
        .unwrap_or_else(|e| fail("Invalid arguments", e));

    // Checked before any prompt so nothing is typed on an unsupported OS.
    let windows = platform::window_system()
        .unwrap_or_else(|e| fail("Unsupported platform", AppError::from(e)));

    if !config.behaviour.skip_confirmation {
        prompt::confirm_run(&request, &config.hotkeys)
            .unwrap_or_else(|e| fail("Failed to read confirmation", e));
    }

    let event_loop = EventLoopBuilder::<LoopCommand>::with_user_event().build();
    let loop_proxy = event_loop.create_proxy();

    // Persists across event loop iterations; dropping it unregisters the hotkeys.
    let mut hotkey_manager: Option<GlobalHotKeyManager> = None;
    let mut launch = Some((config, request, windows));

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(LoopCommand::Exit(code)) => {
                *control_flow = ControlFlow::ExitWithCode(code);
                return;
            }
            Event::NewEvents(tao::event::StartCause::Init) => {
                let Some((config, request, windows)) = launch.take() else {
                    return;
                };

                // Registered on the main thread: tao's event loop pumps the
                // Windows messages needed for WM_HOTKEY delivery.
                let (manager, hotkey_ids) =
                    match hotkey_handler::register_hotkeys(&config.hotkeys) {
                        Ok(pair) => pair,
                        Err(e) => fail("Failed to register hotkeys", e),
                    };
                hotkey_manager = Some(manager);

                let loop_proxy = loop_proxy.clone();

                // The tokio runtime lives on its own thread; the hotkey
                // manager stays on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => fail("Failed to create tokio runtime", AppError::from(e)),
                    };

                    let code = rt.block_on(async {
                        let (app, hotkey_handler, shutdown_rx) =
                            assemble(config, request, windows, hotkey_ids);

                        let (_, code) = tokio::join!(
                            async {
                                if let Err(e) = hotkey_handler.run(shutdown_rx).await {
                                    error!(error = ?e, "Hotkey handler error");
                                }
                            },
                            app.run()
                        );
                        code
                    });

                    if loop_proxy.send_event(LoopCommand::Exit(code)).is_err() {
                        std::process::exit(code);
                    }
                });
            }
            _ => {}
        }

        // Keep hotkey_manager alive in the closure for the app's lifetime.
        let _ = &hotkey_manager;
    });
}

/// Wire the core components to the console, keyboard and OS backends.
fn assemble(
    config: Config,
    request: ActionRequest,
    windows: Arc<dyn WindowSystem>,
    hotkey_ids: HotkeyIds,
) -> (App, HotkeyHandler, watch::Receiver<bool>) {
    let timings = Timings::default();
    let status: Arc<dyn StatusSink> = Arc::new(ConsoleReporter::stdout(config.behaviour.verbose));
    let session = Arc::new(SessionCell::new());
    let abort = Arc::new(AbortController::new(
        Arc::clone(&session),
        Arc::clone(&status),
    ));
    let locator = Arc::new(WindowLocator::new(
        TargetApp::discord(config.target.install_dir()),
        windows,
        Arc::new(ShellLauncher) as Arc<dyn Launcher>,
        timings.launch_settle,
    ));
    let pause = Arc::new(PauseController::new(
        session,
        Arc::clone(&locator),
        Arc::clone(&status),
        timings.resume_settle,
    ));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let keep_failsafe = config.behaviour.keep_failsafe;
    let app = App {
        request,
        locator,
        abort: Arc::clone(&abort),
        status,
        timings,
        keyboard: Box::new(move || {
            EnigoKeystrokes::new(keep_failsafe).map(|keys| Box::new(keys) as Box<dyn Keystrokes>)
        }),
        ready_prompt: Box::new(prompt::wait_for_ready),
        shutdown_tx,
    };

    (app, HotkeyHandler::new(hotkey_ids, pause, abort), shutdown_rx)
}

fn fail(context: &str, e: AppError) -> ! {
    error!(error = ?e, "{context}");
    eprintln!("{context}: {e}");
    std::process::exit(EXIT_FAILURE);
}

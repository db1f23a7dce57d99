//! Command implementations for the Leleku CLI.
//!
//! The commands drive the same view-models as the web dashboard, with a
//! JSON file standing in for the session cookie and log lines standing in
//! for page redirects.

use std::path::Path;

use anyhow::bail;
use clap::Subcommand;
use leleku_core::api::{Credentials, HttpMonitorApi};
use leleku_core::config::AppConfig;
use leleku_core::dashboard::{self, DashboardState, LoadOutcome, Source};
use leleku_core::login::{self, LoginField, LoginForm};
use leleku_core::session::{self, Guard, Page, SessionStore};

pub mod nav;
pub mod report;
pub mod session_file;

use nav::ConsoleNav;
use session_file::FileSession;

#[derive(Subcommand)]
pub enum Command {
    /// Sign in and keep the session token for later commands
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long, env = "LELEKU_PASSWORD")]
        password: String,
    },

    /// Forget the stored session token
    Logout,

    /// Fetch the current sensor snapshot and print the dashboard cards
    Snapshot,
}

pub async fn run(command: Command, config: &AppConfig, session_path: &Path) -> anyhow::Result<()> {
    let api = HttpMonitorApi::new(config.clone());
    let store = FileSession::new(session_path);
    let nav = ConsoleNav::default();

    match command {
        Command::Login { username, password } => {
            if session::guard(Page::Login, &store, &nav) == Guard::Redirected {
                println!("Already signed in.");
                return Ok(());
            }

            let mut form = LoginForm::default();
            form.update_field(LoginField::Username, username);
            form.update_field(LoginField::Password, password);
            let Some(credentials) = form.begin_submit() else {
                bail!("username and password are required");
            };
            login_with(&api, &store, &nav, &credentials, config).await
        }
        Command::Logout => {
            session::logout(&store, &nav);
            println!("Signed out.");
            Ok(())
        }
        Command::Snapshot => {
            let had_session = store.token().is_some();
            match dashboard::mount(&api, &store, &nav).await {
                LoadOutcome::Loaded(payload) => {
                    let state =
                        dashboard::reduce(&DashboardState::default(), payload, Source::Snapshot);
                    print!("{}", report::render(&state, &chrono::Local));
                    Ok(())
                }
                LoadOutcome::Unavailable(status) => {
                    println!("Backend answered with status {}; nothing to show.", status);
                    Ok(())
                }
                LoadOutcome::Redirected => bail!(redirect_message(had_session)),
            }
        }
    }
}

/// Why `snapshot` ended at the login page.
fn redirect_message(had_session: bool) -> &'static str {
    if had_session {
        "could not load the snapshot; the session was cleared, run `leleku-cli login` again"
    } else {
        "not signed in; run `leleku-cli login` first"
    }
}

async fn login_with(
    api: &HttpMonitorApi,
    store: &FileSession,
    nav: &ConsoleNav,
    credentials: &Credentials,
    config: &AppConfig,
) -> anyhow::Result<()> {
    match login::submit(api, store, nav, credentials, config.token_ttl()).await {
        Ok(()) => {
            println!(
                "Signed in as {} (session valid for {} day(s)).",
                credentials.username, config.token_expiry_days
            );
            Ok(())
        }
        Err(message) => bail!(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_message_depends_on_prior_session() {
        assert!(redirect_message(false).starts_with("not signed in"));
        let cleared = redirect_message(true);
        assert!(cleared.contains("session was cleared"));
        assert_ne!(cleared, redirect_message(false));
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use listing_desk::chat::ChatRoom;
use listing_desk::config::Config;
use listing_desk::listings;
use listing_desk::models::{Money, Role};
use listing_desk::notify::{amount, Notification};
use listing_desk::session::{self, Registration, Section, Sessions};
use listing_desk::store::{open_desk, DeskStore, FileStore};
use listing_desk::workflow::ApprovalDesk;
use listing_desk::DeskError;

#[derive(Parser)]
#[command(name = "listing-desk")]
#[command(about = "Property listing dashboard: sessions, chat and the agent approval queue")]
#[command(version)]
struct Cli {
    /// Path to listing-desk.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the storage directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the approval queue with demo submissions if it is empty
    Init,

    /// Sign in with any email and password
    Login { email: String, password: String },

    /// Create an account and sign in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        /// buyer, owner or agent
        #[arg(long, default_value = "buyer")]
        role: String,
    },

    /// End the current session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show the dashboard for the signed-in role
    Dashboard,

    /// List submissions awaiting approval
    Pending {
        /// Print the rendered approval grid instead of a summary
        #[arg(long)]
        html: bool,
    },

    /// List approved submissions
    Approved,

    /// Approve a pending submission
    Approve {
        id: String,
        /// Fee to debit; defaults to the submission's own fee
        #[arg(long)]
        fee: Option<Money>,
    },

    /// Reject a pending submission
    Reject { id: String },

    /// Show the agent balance
    Balance,

    /// Listing conversations
    Chat {
        #[command(subcommand)]
        command: ChatCommand,
    },

    /// Preview the listing cards in an HTML file
    Card { file: PathBuf },

    /// Run the approve/reject buttons found in an HTML file
    Action { file: PathBuf },

    /// Clear all stored state
    Reset,
}

#[derive(Subcommand)]
enum ChatCommand {
    /// Print a listing's conversation
    Show { property: String },

    /// Send a message and wait for the owner's reply
    Send {
        property: String,
        text: String,
        #[arg(long)]
        no_reply: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = Some(dir);
    }

    let data_dir = config.data_dir();
    let mut store = open_desk(&data_dir, config.ledger.opening_balance)
        .with_context(|| format!("Failed to open storage in {}", data_dir.display()))?;
    info!("🏠 Listing desk using {}", data_dir.display());

    run(cli.command, &mut store, &config).await
}

async fn run(command: Commands, store: &mut DeskStore<FileStore>, config: &Config) -> Result<()> {
    let currency = config.ledger.currency.as_str();

    match command {
        Commands::Init => {
            let added = ApprovalDesk::new(store).initialize()?;
            if added == 0 {
                println!("Approval queue already has submissions");
            } else {
                println!("Added {} demo submissions", added);
            }
        }

        Commands::Login { email, password } => {
            match Sessions::new(store).login(&email, &password) {
                Ok(user) => {
                    println!("{}", session::login_notification());
                    println!("Signed in as {} <{}>", user.name, user.email);
                }
                Err(err) => report(err, currency)?,
            }
        }

        Commands::Register {
            name,
            email,
            phone,
            role,
        } => {
            let user = Sessions::new(store).register(Registration {
                name,
                email,
                phone,
                role: Role::from_label(&role),
            })?;
            println!("{}", session::register_notification());
            println!("Signed in as {} ({})", user.name, user.role());
        }

        Commands::Logout => {
            Sessions::new(store).logout()?;
            println!("{}", session::logout_notification());
        }

        Commands::Whoami => match Sessions::new(store).current()? {
            Some(user) => {
                println!("{} <{}>", user.name, user.email);
                println!("   Role: {}", user.role());
                if let Some(phone) = &user.phone {
                    println!("   Phone: {}", phone);
                }
            }
            None => println!("Not signed in (browsing as buyer)"),
        },

        Commands::Dashboard => {
            let sessions = Sessions::new(store);
            let name = sessions.current()?.map(|u| u.name);
            let layout = sessions.layout()?;

            println!("Dashboard for {} ({})", name.as_deref().unwrap_or("guest"), layout.role);
            println!("   Navigation: {}", layout.nav_links().join(", "));
            for section in &layout.sections {
                println!("   - {:?}", section);
            }

            if layout.can_approve() {
                let desk = ApprovalDesk::new(store);
                if layout.shows(Section::Balance) {
                    println!();
                    println!("Balance: {}", amount(desk.balance()?, currency));
                }
                print_pending(&desk, currency)?;
            }
        }

        Commands::Pending { html } => {
            let desk = ApprovalDesk::new(store);
            if html {
                println!("{}", listings::pending_grid_html(&desk.list_pending()?, currency));
            } else {
                print_pending(&desk, currency)?;
            }
        }

        Commands::Approved => {
            let approved = ApprovalDesk::new(store).list_approved()?;
            if approved.is_empty() {
                println!("No approved submissions yet");
            }
            for (i, record) in approved.iter().enumerate() {
                println!(
                    "{}. {} [{}] approved {}",
                    i + 1,
                    record.submission.title,
                    record.id(),
                    record.approved_at.format("%Y-%m-%d %H:%M UTC")
                );
            }
        }

        Commands::Approve { id, fee } => {
            Sessions::new(store).require_agent()?;
            let mut desk = ApprovalDesk::new(store);
            let fee = match fee {
                Some(fee) => fee,
                None => desk
                    .list_pending()?
                    .into_iter()
                    .find(|s| s.id == id)
                    .map(|s| s.fee)
                    .unwrap_or(Money::ZERO),
            };
            match desk.approve(&id, fee) {
                Ok(outcome) => println!("{}", outcome.notification(currency)),
                Err(err) => report(err, currency)?,
            }
            print_pending(&desk, currency)?;
        }

        Commands::Reject { id } => {
            Sessions::new(store).require_agent()?;
            let mut desk = ApprovalDesk::new(store);
            println!("{}", desk.reject(&id)?.notification());
            print_pending(&desk, currency)?;
        }

        Commands::Balance => {
            let balance = ApprovalDesk::new(store).balance()?;
            println!("Balance: {}", amount(balance, currency));
        }

        Commands::Chat { command } => match command {
            ChatCommand::Show { property } => {
                let room = ChatRoom::new(store, &config.chat);
                for message in room.transcript(&property)? {
                    println!(
                        "[{}] {} ({}): {}",
                        message.timestamp.format("%H:%M"),
                        message.sender,
                        message.direction.as_str(),
                        message.text
                    );
                }
            }
            ChatCommand::Send {
                property,
                text,
                no_reply,
            } => {
                let mut room = ChatRoom::new(store, &config.chat);
                match room.send(&property, &text)? {
                    Some(message) => println!("{}: {}", message.sender, message.text),
                    None => {
                        warn!("Empty message, nothing sent");
                        return Ok(());
                    }
                }
                if !no_reply {
                    let reply = room.reply(&property).await?;
                    println!("{}: {}", reply.sender, reply.text);
                }
            }
        },

        Commands::Card { file } => {
            let html = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let previews = listings::parse_property_cards(&html)?;
            if previews.is_empty() {
                println!("No property cards found in {}", file.display());
            }
            for preview in previews {
                println!("{} ({})", preview.title, preview.price);
                println!("   ID: {}", preview.id);
                println!("   Location: {}", preview.location);
                for (kind, feature) in &preview.features {
                    println!("   [{}] {}", kind.icon(), feature);
                }
                println!("   {}", preview.description());
                println!();
            }
        }

        Commands::Action { file } => {
            Sessions::new(store).require_agent()?;
            let html = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let actions = listings::parse_actions(&html)?;
            let mut desk = ApprovalDesk::new(store);
            for action in actions {
                match action.dispatch(&mut desk) {
                    Ok(result) => println!("{}: {}", action.id(), result.notification(currency)),
                    Err(err) => report(err, currency)?,
                }
            }
            print_pending(&desk, currency)?;
        }

        Commands::Reset => {
            store.session_mut().clear()?;
            store.profile_mut().clear()?;
            println!("{}", Notification::success("All stored data cleared"));
        }
    }

    Ok(())
}

fn print_pending(desk: &ApprovalDesk<'_, FileStore>, currency: &str) -> Result<()> {
    let pending = desk.list_pending()?;
    println!();
    println!("{} submission(s) awaiting approval", pending.len());
    for (i, submission) in pending.iter().enumerate() {
        println!("{}. {} ({})", i + 1, submission.title, submission.price);
        println!("   {}", submission.location);
        println!(
            "   {} · {} rooms · {} baths · {} m²",
            submission.property_type, submission.rooms, submission.baths, submission.area
        );
        println!("   Owner: {}", submission.owner);
        println!("   Fee: {}", amount(submission.fee, currency));
        println!("   ID: {}", submission.id);
    }
    Ok(())
}

/// Print a workflow failure as a notification. Storage failures abort.
fn report(err: DeskError, currency: &str) -> Result<()> {
    match err {
        DeskError::Store(_) => Err(err.into()),
        other => {
            println!("{}", Notification::from_error(&other, currency));
            Ok(())
        }
    }
}

use clap::{Parser, Subcommand, ValueEnum};
use game_objects::{
    build_state, AppError, CreateGameObjectInput, DbKind, GameObjectType, RuntimeEnv,
    UpdateGameObjectInput,
};
use serde::Serialize;
use uuid::Uuid;

mod telemetry;

#[derive(Clone, ValueEnum)]
enum Env {
    Prod,
    Test,
}

#[derive(Clone, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

#[derive(Parser)]
#[command(name = "game-objects")]
#[command(about = "Game object administration tool")]
struct Args {
    /// Runtime environment
    #[arg(short, long, value_enum, default_value = "prod")]
    env: Env,

    /// Database type
    #[arg(short, long, value_enum, default_value = "postgres")]
    db: Db,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate and store a new game object
    Create {
        #[arg(long = "type")]
        game_object_type: GameObjectType,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        value: Option<i32>,
    },
    /// Print one game object
    Get { id: Uuid },
    /// Print a random game object of a type, or null
    Random {
        #[arg(long = "type")]
        game_object_type: GameObjectType,
        /// Id to exclude; repeatable
        #[arg(long = "omit")]
        omit: Vec<Uuid>,
    },
    /// Change selected fields of a game object
    Update {
        id: Uuid,
        #[arg(long = "type")]
        game_object_type: Option<GameObjectType>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, conflicts_with = "clear_description")]
        description: Option<String>,
        #[arg(long)]
        clear_description: bool,
        #[arg(long, conflicts_with = "clear_image_url")]
        image_url: Option<String>,
        #[arg(long)]
        clear_image_url: bool,
        #[arg(long, allow_hyphen_values = true)]
        value: Option<i32>,
    },
    /// Delete a game object; prints whether it existed
    Delete { id: Uuid },
}

/// Three-state patch value from a `--field` / `--clear-field` pair.
fn patch(value: Option<String>, clear: bool) -> Option<Option<String>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::config(format!("failed to encode output: {e}")))?;
    println!("{out}");
    Ok(())
}

async fn run(args: Args) -> Result<(), AppError> {
    let env = match args.env {
        Env::Prod => RuntimeEnv::Prod,
        Env::Test => RuntimeEnv::Test,
    };
    let db_kind = match args.db {
        Db::Postgres => DbKind::Postgres,
        Db::SqliteFile => DbKind::SqliteFile,
        Db::SqliteMemory => DbKind::SqliteMemory,
    };

    let state = build_state().with_env(env).with_db(db_kind).build().await?;
    let service = state.game_objects();

    match args.command {
        Command::Create {
            game_object_type,
            name,
            description,
            image_url,
            value,
        } => {
            let input = CreateGameObjectInput {
                game_object_type,
                name,
                description,
                image_url,
                value,
            };
            print_json(&service.create(input).await?)
        }
        Command::Get { id } => print_json(&service.find_one(id).await?),
        Command::Random {
            game_object_type,
            omit,
        } => print_json(
            &service
                .find_randomly_one(game_object_type, Some(omit.as_slice()))
                .await?,
        ),
        Command::Update {
            id,
            game_object_type,
            name,
            description,
            clear_description,
            image_url,
            clear_image_url,
            value,
        } => {
            let input = UpdateGameObjectInput {
                game_object_type,
                name,
                description: patch(description, clear_description),
                image_url: patch(image_url, clear_image_url),
                value,
            };
            print_json(&service.update(id, input).await?)
        }
        Command::Delete { id } => print_json(&service.delete(id).await?),
    }
}

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

use std::process;

use anyhow::{Context, Result, anyhow};
use catalog_client::{CatalogClient, CatalogClientError};
use catalog_core::{
    CardView, Collection, FieldPath, FormError, FormRecord, IdPolicy, Modal, Post, PostField,
    User,
};
use clap::{Parser, Subcommand};
use tracing::info;

mod logging;
mod settings;

use logging::init_logging;
use settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "catalog-cli", version, about = "CLI каталога пользователей и постов")]
struct Cli {
    /// Адрес REST-источника (по умолчанию CATALOG_API_URL или jsonplaceholder).
    #[arg(long, global = true)]
    api: Option<String>,

    /// Подробнее логи: `-v` — info, `-vv` — debug.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Карточки пользователей.
    Users {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Карточки постов.
    Posts {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Поля формы пользователя: путь, тип, подпись.
    Fields,
    /// Добавление пользователя к загруженному списку.
    ///
    /// Каждое `--set` задаёт одно поле: `--set address.geo.lat=40.7`.
    AddUser {
        #[arg(long = "set", value_name = "PATH=VALUE")]
        fields: Vec<String>,
    },
    /// Добавление поста к загруженному списку.
    AddPost {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;
    let cli = Cli::parse();
    init_logging(&settings.log_level, cli.verbose)?;

    let client = CatalogClient::new(settings.client_config(cli.api))
        .map_err(map_client_error)?;

    match cli.command {
        Command::Users { limit } => {
            let users = client.list_users(limit).await.map_err(map_client_error)?;
            print_cards("Пользователей", &Collection::from_fetched(users));
        }
        Command::Posts { limit } => {
            let posts = client.list_posts(limit).await.map_err(map_client_error)?;
            print_cards("Постов", &Collection::from_fetched(posts));
        }
        Command::Fields => print_fields::<User>(),
        Command::AddUser { fields } => {
            let assignments = fields
                .iter()
                .map(|raw| parse_assignment(raw))
                .collect::<Result<Vec<_>>>()?;

            let users = client.list_users(None).await.map_err(map_client_error)?;
            let mut collection = Collection::from_fetched(users);

            let mut modal = Modal::<User>::new();
            modal.open();
            for (path, value) in assignments {
                modal.edit_path(path, value).map_err(map_form_error)?;
            }

            let mut added = None;
            modal
                .submit(|draft| added = Some(collection.append(draft, IdPolicy::Renumber).clone()))
                .map_err(map_form_error)?;
            let added = added.context("пользователь не был добавлен")?;
            info!(id = added.id, total = collection.len(), "user added");

            println!("Пользователь добавлен (всего: {})", collection.len());
            print!("{}", added.card());
        }
        Command::AddPost { title, body } => {
            let posts = client.list_posts(None).await.map_err(map_client_error)?;
            let mut collection = Collection::from_fetched(posts);

            let mut modal = Modal::<Post>::new();
            modal.open();
            modal.edit(PostField::Title, &title).map_err(map_form_error)?;
            modal.edit(PostField::Body, &body).map_err(map_form_error)?;

            let draft = modal.take_submission().map_err(map_form_error)?;
            let added = collection.append(draft, IdPolicy::Renumber).clone();
            info!(id = added.id, total = collection.len(), "post added");

            println!("Пост добавлен (всего: {})", collection.len());
            print!("{}", added.card());
        }
    }

    Ok(())
}

fn parse_assignment(raw: &str) -> Result<(&str, &str)> {
    let (path, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("ожидается PATH=VALUE, получено '{raw}'"))?;

    let path = path.trim();
    if path.is_empty() {
        return Err(anyhow!("пустой путь в '{raw}'"));
    }
    Ok((path, value))
}

fn map_client_error(err: CatalogClientError) -> anyhow::Error {
    let message = match err {
        CatalogClientError::Status { status, url } => {
            format!("источник ответил {status} на {url}")
        }
        CatalogClientError::Decode(err) => {
            format!("ответ источника не похож на список записей: {err}")
        }
        CatalogClientError::InvalidConfig(message) => format!("некорректные настройки: {message}"),
        CatalogClientError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow!(message)
}

fn map_form_error(err: FormError) -> anyhow::Error {
    let message = match err {
        FormError::InvalidPath(path) => {
            format!("нет такого поля: '{path}' (см. `catalog-cli fields`)")
        }
        FormError::NotANumber { field, raw } => format!("поле {field} ожидает число, получено '{raw}'"),
        FormError::Validation { field, message } => format!("поле {field}: {message}"),
        FormError::ModalClosed => "форма закрыта".to_string(),
    };
    anyhow!(message)
}

fn print_cards<R: CardView + catalog_core::Record>(title: &str, collection: &Collection<R>) {
    println!("{title}: {}", collection.len());
    for card in collection.cards() {
        println!();
        print!("{card}");
    }
}

fn print_fields<R: FormRecord>() {
    for field in R::FIELDS {
        let required = if field.required() { " (required)" } else { "" };
        println!(
            "{:<22} {:<7} {}{required}",
            field.to_string(),
            field.kind().input_type(),
            field.label()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_assignment_splits_on_first_equals() {
        let (path, value) = parse_assignment("company.bs=a=b").expect("must parse");
        assert_eq!(path, "company.bs");
        assert_eq!(value, "a=b");
    }

    #[test]
    fn parse_assignment_keeps_empty_value() {
        let (path, value) = parse_assignment("address.geo.lng=").expect("must parse");
        assert_eq!(path, "address.geo.lng");
        assert_eq!(value, "");
    }

    #[test]
    fn parse_assignment_rejects_missing_equals_and_empty_path() {
        assert!(parse_assignment("name").is_err());
        assert!(parse_assignment(" =x").is_err());
    }

    #[test]
    fn map_form_error_mentions_field() {
        let err = map_form_error(FormError::Validation {
            field: "title".to_string(),
            message: "must not be empty",
        });
        assert_eq!(err.to_string(), "поле title: must not be empty");
    }

    #[test]
    fn cli_counts_verbose_flags() {
        let cli = Cli::parse_from(["catalog-cli", "-vv", "posts", "--limit", "3"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Posts { limit: Some(3) }));
    }

    #[test]
    fn cli_parses_repeated_set_flags() {
        let cli = Cli::parse_from([
            "catalog-cli",
            "add-user",
            "--set",
            "name=Leanne",
            "--set",
            "address.geo.lat=40.7",
        ]);
        match cli.command {
            Command::AddUser { fields } => assert_eq!(fields, ["name=Leanne", "address.geo.lat=40.7"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

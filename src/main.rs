use std::io::{self, Write};
use std::path::Path;

#[macro_use]
extern crate log;

use clap::{crate_version, value_t, App, AppSettings, Arg, ArgMatches, SubCommand};

use crud::admin;
use crud::settings::DatabaseSettings;
use crud::{Error, Model, PgStore, Store, Test};

fn id_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("id").required(true).help("Record id")
}

fn name_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("name")
        .long("name")
        .short("n")
        .takes_value(true)
        .value_name("NAME")
        .help("Name, at most 300 characters")
}

fn cli<'a, 'b>() -> App<'a, 'b> {
    App::new("crud")
        .version(crate_version!())
        .about("Manages Test records stored in Postgres")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .value_name("FILE")
                .help("Postgres settings file (default: config/postgres.*)"),
        )
        .subcommand(SubCommand::with_name("init").about("Creates the crud_test table"))
        .subcommand(
            SubCommand::with_name("create")
                .about("Inserts a record")
                .arg(name_arg()),
        )
        .subcommand(SubCommand::with_name("list").about("Lists every record"))
        .subcommand(
            SubCommand::with_name("show")
                .about("Prints a record's label")
                .arg(id_arg()),
        )
        .subcommand(
            SubCommand::with_name("update")
                .about("Renames or clears a record's name")
                .arg(id_arg())
                .arg(name_arg().required_unless("clear"))
                .arg(
                    Arg::with_name("clear")
                        .long("clear")
                        .conflicts_with("name")
                        .help("Removes the name"),
                ),
        )
        .subcommand(
            SubCommand::with_name("delete")
                .about("Deletes a record")
                .arg(id_arg()),
        )
}

fn id_of(matches: &ArgMatches) -> i64 {
    value_t!(matches, "id", i64).unwrap_or_else(|e| e.exit())
}

fn list<S: Store, W: Write>(store: &mut S, out: &mut W) -> crud::Result<()> {
    let site = admin::site()?;
    let admin = site
        .get::<Test>()
        .ok_or_else(|| Error::NotRegistered(Test::meta().model_name.to_string()))?;
    let records = store.all()?;

    writeln!(out, "{} ({})", admin.verbose_name_plural(), records.len())?;
    writeln!(out, "{}", admin.headers().join("\t"))?;
    for record in &records {
        writeln!(out, "{}", admin.row(record).join("\t"))?;
    }
    Ok(())
}

/// Runs every subcommand that only needs the `Store` operations.
fn execute<S: Store, W: Write>(
    matches: &ArgMatches,
    store: &mut S,
    out: &mut W,
) -> crud::Result<()> {
    match matches.subcommand() {
        ("create", Some(sub)) => {
            let test = store.insert(&Test::new(sub.value_of("name").map(String::from)))?;
            writeln!(out, "{}", test.pk().unwrap_or_default())?;
        }
        ("list", Some(_)) => list(store, out)?,
        ("show", Some(sub)) => {
            let test = store.get(id_of(sub))?;
            writeln!(out, "{}", test.display_label())?;
        }
        ("update", Some(sub)) => {
            let mut test = store.get(id_of(sub))?;
            test.name = if sub.is_present("clear") {
                None
            } else {
                sub.value_of("name").map(String::from)
            };
            store.save(&mut test)?;
        }
        ("delete", Some(sub)) => store.delete(id_of(sub))?,
        (name, _) => unreachable!("unhandled subcommand {:?}", name),
    }
    Ok(())
}

fn run(matches: &ArgMatches) -> crud::Result<()> {
    let settings = DatabaseSettings::load(matches.value_of("config").map(Path::new))?;
    let mut store = PgStore::connect(&settings)?;
    info!("connected to {}:{}", settings.host, settings.port);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let ("init", Some(_)) = matches.subcommand() {
        store.create_table()?;
        writeln!(out, "OK: {} ready.", Test::meta().db_table)?;
        return Ok(());
    }
    execute(matches, &mut store, &mut out)
}

fn main() {
    env_logger::init();

    let matches = cli().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

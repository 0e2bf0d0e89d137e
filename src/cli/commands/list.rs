use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::RegistryLogic;
use crate::db;
use crate::errors::AppResult;
use crate::models::{Person, PersonKind};
use crate::ui::messages::{info, warning};
use crate::utils::table::Table;
use crate::utils::{or_dash, truncate};

const DETAILS_WIDTH: usize = 48;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { kind, area } = cmd {
        let store = db::open(cfg)?;

        let people: Vec<Person> = match (kind, area) {
            (_, Some(area)) => {
                if kind.is_some_and(|k| k != PersonKind::Volunteer) {
                    warning("--area only applies to volunteers.");
                }
                store
                    .get_volunteers_by_category(area)?
                    .into_iter()
                    .map(Person::from)
                    .collect()
            }
            (Some(k), None) => RegistryLogic::people_of_kind(store.as_ref(), *k)?,
            (None, None) => RegistryLogic::all_people(store.as_ref())?,
        };

        if people.is_empty() {
            info("No records found.");
            return Ok(());
        }

        let mut table = Table::new(&["TYPE", "ID", "NAME", "DATE", "DETAILS"]);
        for p in &people {
            table.add_row(vec![
                p.kind().to_string(),
                p.id().to_string(),
                p.name().to_string(),
                p.date().to_string(),
                truncate(&details(p), DETAILS_WIDTH),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}

fn details(p: &Person) -> String {
    match p {
        Person::Volunteer(v) => format!(
            "{} {}-{} {}",
            v.area.label(),
            v.time_in,
            or_dash(v.time_out.as_deref()),
            v.activities
        ),
        Person::Guest(g) => {
            let mut s = format!("{} <{}>", g.reason.to_db_str(), g.email);
            if let (Some(b), Some(gr)) = (&g.bride_name, &g.groom_name) {
                s.push_str(&format!(" {b} & {gr}"));
            }
            s
        }
        Person::Staff(s) => format!(
            "in {} out {}",
            or_dash(s.time_in.as_deref()),
            or_dash(s.time_out.as_deref())
        ),
    }
}

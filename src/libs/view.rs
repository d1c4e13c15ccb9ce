use crate::libs::event::{Event, TIME_FORMAT};
use crate::libs::formatter::{format_duration, format_seconds};
use crate::libs::report::AggregateRow;
use crate::libs::user::User;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn users<'a>(users: impl IntoIterator<Item = &'a User>) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "STATUS"]);
        for user in users {
            table.add_row(row![user.id, user.name, user.status]);
        }
        table.printstd();
    }

    pub fn log(entries: &[Event]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "USER ID", "NAME", "TIME", "STATUS", "ENTRY TYPE", "DURATION"]);
        for entry in entries {
            table.add_row(row![
                entry.id,
                entry.user_id,
                entry.name,
                entry.time.format(TIME_FORMAT),
                entry.status,
                entry.entry_type,
                format_seconds(entry.duration)
            ]);
        }
        table.printstd();
    }

    pub fn report(rows: &[AggregateRow]) {
        let mut table = Table::new();

        table.add_row(row!["USER ID", "NAME", "TIME WORKED"]);
        for line in rows {
            table.add_row(row![line.user_id, line.name, format_duration(&line.total)]);
        }
        table.printstd();
    }
}

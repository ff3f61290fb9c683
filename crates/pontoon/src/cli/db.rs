//! Database administration handlers.

use super::commands::DbCommands;
use pontoon_database::{establish_connection, provision};
use pontoon_error::PontoonResult;

/// Handle database administration commands.
pub fn handle_db_command(cmd: DbCommands) -> PontoonResult<()> {
    match cmd {
        DbCommands::Provision => {
            let mut conn = establish_connection()?;
            provision(&mut conn)?;
            println!("Tables 'users' and 'bridge_transfers' are ready.");
            Ok(())
        }
    }
}

use crate::user_commands::UserCommands;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in through the storefront login page
    Login {
        /// Account email
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Log in through the admin login page (webmasters only)
    AdminLogin {
        /// Account email
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Clear the current session
    Logout,

    /// Show the identity held by the current session
    Whoami,

    /// Check whether the current session may open a path
    Guard {
        /// Route path, e.g. /admin/users
        path: String,
    },

    /// User management (webmaster only)
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
}

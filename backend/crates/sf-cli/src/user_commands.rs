use clap::{Args, Subcommand};

const CATEGORIES: [&str; 4] = ["customer", "franchise", "webmaster", "test"];

/// Contact fields shared by create and update
#[derive(Args, Debug, Default, Clone)]
pub struct ContactArgs {
    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub country_code: Option<String>,

    #[arg(long)]
    pub zip_code: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List users
    List {
        /// Case-insensitive match on first name, last name, email or phone
        #[arg(long)]
        search: Option<String>,

        /// Only users of this category
        #[arg(long, value_parser = CATEGORIES)]
        category: Option<String>,

        /// all, active or inactive
        #[arg(long, default_value = "all", value_parser = ["all", "active", "inactive"])]
        status: String,

        /// Report schema drift instead of listing users
        #[arg(long, conflicts_with_all = ["search", "category"])]
        stale: bool,
    },

    /// Get a user by ID
    Get {
        id: String,
    },

    /// Create a user
    Create {
        /// User ID (generated when omitted)
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        email: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long, value_parser = CATEGORIES)]
        category: String,

        #[arg(long)]
        password: String,

        /// Required for every category except customer
        #[arg(long)]
        username: Option<String>,

        /// Grant back-office permissions
        #[arg(long)]
        permissions: bool,

        #[command(flatten)]
        contact: ContactArgs,
    },

    /// Update a user's attributes
    Update {
        id: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        password: Option<String>,

        #[arg(long)]
        permissions: Option<bool>,

        #[command(flatten)]
        contact: ContactArgs,
    },

    /// Delete a user
    Delete {
        id: String,
    },

    /// Upgrade a customer to franchise
    Promote {
        id: String,

        /// Username for the franchise account (default: the stored one)
        #[arg(long)]
        username: Option<String>,
    },

    /// Revert a franchise user to customer
    Demote {
        id: String,
    },

    /// Flip a user between active and inactive
    ToggleStatus {
        id: String,
    },

    /// Bring user documents up to the current schema
    Reconcile {
        /// Only this user (default: every stale user)
        id: Option<String>,

        /// Username to fill in while reconciling
        #[arg(long, requires = "id")]
        username: Option<String>,
    },
}

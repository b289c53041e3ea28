use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "palmstock")]
#[command(about = "Back-office inventory and reservation tracker for real-estate sales teams", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stock dashboard: overview cards plus a grid or floor view
    #[command(alias = "st")]
    Stock {
        /// Search by unit number, type, area, or price
        #[arg(short, long)]
        search: Option<String>,

        /// Restrict to one site (default: all)
        #[arg(long)]
        site: Option<String>,

        /// Restrict to one status (default: all)
        #[arg(long)]
        status: Option<String>,

        /// Show the floor-plan view for this floor instead of the grid
        #[arg(short, long)]
        floor: Option<u32>,
    },

    /// Manage the property inventory
    #[command(subcommand, alias = "prop")]
    Property(PropertyCmd),

    /// Track reservations and their clients
    #[command(subcommand, alias = "res")]
    Reservation(ReservationCmd),

    /// Administer back-office accounts
    #[command(subcommand)]
    User(UserCmd),

    /// Reports over the live collections
    Report {
        #[command(subcommand)]
        section: ReportCmd,
    },
}

#[derive(Subcommand, Debug)]
pub enum PropertyCmd {
    /// List properties
    #[command(alias = "ls")]
    List {
        /// Search by unit number, type, area, or price
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long)]
        site: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long = "type")]
        kind: Option<String>,
    },

    /// Show full details of one property
    #[command(alias = "v")]
    View {
        /// Unit number or id prefix
        reference: String,
    },

    /// Add a property to the inventory
    Add {
        /// Unit number (e.g. B301)
        number: String,

        #[arg(long = "type")]
        kind: String,

        /// Area in sqft
        #[arg(long)]
        area: String,

        /// Price in ETB
        #[arg(long)]
        price: String,

        #[arg(long)]
        floor: u32,

        #[arg(long)]
        site: String,

        #[arg(long)]
        description: Option<String>,

        /// Repeat for each amenity
        #[arg(long = "amenity")]
        amenities: Vec<String>,
    },

    /// Edit fields of a property
    Edit {
        /// Unit number or id prefix
        reference: String,

        #[arg(long)]
        number: Option<String>,

        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long)]
        area: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        floor: Option<u32>,

        #[arg(long)]
        site: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a property
    #[command(alias = "rm")]
    Delete {
        /// Unit number or id prefix
        reference: String,
    },

    /// Reserve an available unit
    Reserve { reference: String },

    /// Mark a reserved unit as sold
    Sell { reference: String },

    /// Return a reserved unit to available
    Release { reference: String },

    /// Take a unit off the market
    Withdraw { reference: String },

    /// Put a withdrawn unit back on the market
    Relist { reference: String },

    /// Set an explicit status (lifecycle-checked)
    Status {
        reference: String,

        /// One of: available, reserved, sold, not-available
        status: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReservationCmd {
    /// List reservations
    #[command(alias = "ls")]
    List {
        /// Search by unit number, client, or agent
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        site: Option<String>,
    },

    /// Show the client details behind a reservation
    Client {
        /// Unit number or id prefix
        reference: String,
    },

    /// Record a new reservation (created as active)
    Add {
        /// Unit number being reserved
        unit: String,

        #[arg(long = "type")]
        kind: String,

        #[arg(long)]
        client: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        agent: String,

        /// Reservation date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        /// Expiry date (YYYY-MM-DD, default one week after the reservation)
        #[arg(long)]
        expires: Option<String>,

        #[arg(long)]
        price: String,

        #[arg(long, default_value = "0")]
        deposit: String,

        #[arg(long, default_value = "")]
        notes: String,

        #[arg(long)]
        site: String,
    },

    /// Edit client, agent, or money fields of a reservation
    Edit {
        /// Unit number or id prefix
        reference: String,

        #[arg(long)]
        client: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        agent: Option<String>,

        /// New expiry date (YYYY-MM-DD)
        #[arg(long)]
        expires: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        deposit: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a reservation
    #[command(alias = "rm")]
    Delete { reference: String },

    /// Confirm an active reservation
    Confirm { reference: String },

    /// Cancel an active reservation
    Cancel { reference: String },

    /// Mark an active reservation as expired
    Expire { reference: String },
}

#[derive(Subcommand, Debug)]
pub enum UserCmd {
    /// List users
    #[command(alias = "ls")]
    List {
        /// Search by name or email
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        status: Option<String>,
    },

    /// Add a user (created as pending)
    Add {
        name: String,

        #[arg(long)]
        email: String,

        /// One of: admin, sales-agent, finance-manager, external-agent
        #[arg(long)]
        role: String,

        #[arg(long)]
        phone: String,

        /// Join date (YYYY-MM-DD, default today)
        #[arg(long)]
        joined: Option<String>,
    },

    /// Edit a user
    Edit {
        /// Email, full name, or id prefix
        reference: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete a user
    #[command(alias = "rm")]
    Delete { reference: String },

    /// Activate a pending or inactive user
    Activate { reference: String },

    /// Deactivate a user
    Deactivate { reference: String },
}

#[derive(Subcommand, Debug)]
pub enum ReportCmd {
    /// Unit counts by status, type, and site
    Inventory {
        #[arg(long)]
        site: Option<String>,

        /// Write the report as JSON to this path
        #[arg(long)]
        export: Option<std::path::PathBuf>,
    },

    /// Completed sales by site and type
    Sales {
        #[arg(long)]
        site: Option<String>,

        #[arg(long)]
        export: Option<std::path::PathBuf>,
    },

    /// Portfolio value, realized revenue, deposits held
    Financial {
        #[arg(long)]
        site: Option<String>,

        #[arg(long)]
        export: Option<std::path::PathBuf>,
    },

    /// Reservation performance per agent
    Agents {
        #[arg(long)]
        site: Option<String>,

        #[arg(long)]
        export: Option<std::path::PathBuf>,
    },

    /// Account counts by role and status
    Users {
        #[arg(long)]
        export: Option<std::path::PathBuf>,
    },
}

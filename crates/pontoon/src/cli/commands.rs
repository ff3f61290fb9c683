//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use pontoon_core::{Currency, PaymentRail, TransferKind};
use std::path::PathBuf;

/// Pontoon - Bridge operations toolkit for fee management, transfers, and exports
#[derive(Parser, Debug)]
#[command(name = "pontoon")]
#[command(about = "Bridge operations toolkit: developer fees, transfers, virtual accounts, exports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Developer fee management
    #[command(subcommand)]
    Fee(FeeCommands),

    /// Virtual account management
    #[command(subcommand)]
    Account(AccountCommands),

    /// Transfer submission and inspection
    #[command(subcommand)]
    Transfer(TransferCommands),

    /// Persist API payloads into Postgres
    #[command(subcommand)]
    Ingest(IngestCommands),

    /// CSV exports
    #[command(subcommand)]
    Export(ExportCommands),

    /// Operation log history
    #[command(subcommand)]
    Log(LogCommands),

    /// Database administration
    #[command(subcommand)]
    Db(DbCommands),

    /// Assemble the wire-confirmation document for a transfer
    Confirmation {
        /// Transfer to confirm
        transfer_id: String,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Write the document JSON to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Developer fee subcommands
#[derive(Subcommand, Debug)]
pub enum FeeCommands {
    /// Update the custom developer fee on a liquidation address
    Liquidation {
        /// Customer the address belongs to
        #[arg(long)]
        customer_id: String,

        /// Wallet/liquidation address to look up
        #[arg(long)]
        address: String,

        /// New fee, as a percentage (e.g. 2.5)
        #[arg(long)]
        fee: String,

        /// Operation log file
        #[arg(long, default_value = "registro_fees.csv")]
        log: PathBuf,
    },

    /// Update the developer fee percent on an existing transfer
    Transfer {
        /// Transfer to update
        #[arg(long)]
        transfer_id: String,

        /// New fee, as a percentage
        #[arg(long)]
        fee: String,
    },
}

/// Virtual account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Create a virtual account for a customer
    Create {
        /// Owning customer
        #[arg(long)]
        customer_id: String,

        /// Currency deposits arrive in
        #[arg(long)]
        source_currency: Currency,

        /// Currency funds convert to
        #[arg(long)]
        destination_currency: Currency,

        /// Chain funds are delivered on
        #[arg(long)]
        payment_rail: PaymentRail,

        /// Wallet the customer receives funds at
        #[arg(long)]
        address: Option<String>,

        /// On-chain memo (chains that support one)
        #[arg(long)]
        blockchain_memo: Option<String>,

        /// Bridge wallet to deliver into
        #[arg(long)]
        bridge_wallet_id: Option<String>,

        /// Developer fee percentage
        #[arg(long)]
        developer_fee: Option<String>,

        /// Save the created account JSON to a file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List a customer's virtual accounts as CSV
    List {
        /// Owning customer
        #[arg(long)]
        customer_id: String,

        /// Write CSV here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Transfer subcommands
#[derive(Subcommand, Debug)]
pub enum TransferCommands {
    /// Submit a transfer
    Create {
        /// Movement shape
        #[arg(long)]
        kind: TransferKind,

        /// Amount to move (e.g. 10.00)
        #[arg(long)]
        amount: String,

        /// Caller-chosen reference id
        #[arg(long)]
        client_reference_id: Option<String>,

        /// Customer on whose behalf the transfer runs
        #[arg(long)]
        on_behalf_of: Option<String>,

        /// Fixed developer fee
        #[arg(long)]
        developer_fee: Option<String>,

        /// Source rail
        #[arg(long)]
        from_rail: Option<PaymentRail>,

        /// Source currency
        #[arg(long)]
        from_currency: Option<Currency>,

        /// Source wallet address or bank account
        #[arg(long)]
        from_address: Option<String>,

        /// Destination rail
        #[arg(long)]
        to_rail: Option<PaymentRail>,

        /// Destination currency
        #[arg(long)]
        to_currency: Option<Currency>,

        /// Destination wallet address or bank account
        #[arg(long)]
        to_address: Option<String>,

        /// Destination bank routing number (off ramp)
        #[arg(long)]
        routing_number: Option<String>,

        /// Operation log file
        #[arg(long, default_value = "registro_transfers.csv")]
        log: PathBuf,
    },

    /// Show a transfer
    Show {
        /// Transfer to fetch
        transfer_id: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// List recently ingested transfers from the database
    Recent {
        /// Maximum number of rows to display
        #[arg(long, default_value = "10")]
        limit: i64,
    },
}

/// Ingest subcommands
#[derive(Subcommand, Debug)]
pub enum IngestCommands {
    /// Fetch transfers and upsert them into bridge_transfers
    Transfer {
        /// Transfer ids to ingest
        #[arg(required = true)]
        transfer_ids: Vec<String>,
    },

    /// Fetch customers and upsert them into users
    Customer {
        /// Customer ids to ingest
        #[arg(required = true)]
        customer_ids: Vec<String>,
    },
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the liquidation-address drains feed to CSV
    Drains {
        /// Maximum number of drains to fetch
        #[arg(long, default_value = "100")]
        limit: u32,

        /// Only drains updated before this epoch-milliseconds cutoff
        #[arg(long)]
        updated_before_ms: Option<u64>,

        /// Output file; defaults to a timestamped name
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Operation log subcommands
#[derive(Subcommand, Debug)]
pub enum LogCommands {
    /// Show recent fee modifications
    Fees {
        /// Maximum number of entries
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Log file to read
        #[arg(long, default_value = "registro_fees.csv")]
        path: PathBuf,
    },

    /// Show recent transfer submissions
    Transfers {
        /// Maximum number of entries
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Log file to read
        #[arg(long, default_value = "registro_transfers.csv")]
        path: PathBuf,
    },
}

/// Database subcommands
#[derive(Subcommand, Debug)]
pub enum DbCommands {
    /// Create the users and bridge_transfers tables if they do not exist
    Provision,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// Plain text document
    Text,
    /// JSON format
    Json,
}

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List all projects
    List,

    /// Get a project by ID
    Get {
        /// Project ID
        id: i64,
    },

    /// Create a project
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,
    },

    /// Open the interactive project board
    Board,
}

//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let profile = factory::profile::create_profile(&db).await?;
//!     let link = factory::discord_link::create_discord_link(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::discord_link::DiscordLinkFactory;
//!
//! let link = DiscordLinkFactory::new(&db)
//!     .user_id("user-1")
//!     .username("gamer")
//!     .has_required_role(true)
//!     .build()
//!     .await?;
//! ```

pub mod discord_link;
pub mod helpers;
pub mod profile;

// Re-export commonly used factory functions for concise usage
pub use discord_link::create_discord_link;
pub use profile::create_profile;

//! # CLI Module
//!
//! Command-line front end of the HexAPI generator, shipped as the `hexapi-gen`
//! binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Render the whole template catalog for one descriptor:
//!
//! ```bash
//! hexapi-gen generate --descriptor temp/User.json --output output
//! ```
//!
//! ### `render`
//!
//! Render a single template:
//!
//! ```bash
//! hexapi-gen render --descriptor temp/User.json \
//!     --template src/main/java/application/xxx/XxxService.java.j2
//! ```
//!
//! ### `new-entity`
//!
//! Normalise an entity name and its fields, then save `<Name>.json`:
//!
//! ```bash
//! hexapi-gen new-entity --name "order line" \
//!     --field id:Long:id \
//!     --field "unit price:BigDecimal:nullable"
//! ```
//!
//! ### `generate-project`
//!
//! Attach company and project to saved entities and generate each of them:
//!
//! ```bash
//! hexapi-gen generate-project --company Acme --project Shop \
//!     --entity temp/User.json --entity temp/OrderLine.json
//! ```
//!
//! ### `variants`, `templates`
//!
//! Print the casing variants of a name, or the catalog in generation order.
//!
//! ## Global Options
//!
//! - `--config <FILE>` - configuration file (default `./hexapi.toml` when present)
//! - `--templates <DIR>` - template root, overriding the configuration
//!
//! Any failure prints the error and exits with status 1.

mod commands;


pub use commands::{execute, load_config, run_cli, Cli, Commands};

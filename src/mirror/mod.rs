pub mod charset;
pub mod config;
pub mod download;
pub mod error;
pub mod locate;
pub mod metadata;
pub mod persist;
pub mod resolve;
pub mod rewrite;
pub mod runner;
pub mod transport;


pub use charset::{PageText, decode_page, encode_page};
pub use config::{DEFAULT_OUTPUT_DIR, MirrorConfig};
pub use download::{AssetJob, download};
pub use error::{ErrorKind, MirrorError};
pub use locate::{AssetKind, LocatedAsset, locate_assets};
pub use metadata::{Metadata, MetadataReport};
pub use persist::{page_file_name, save, save_encoded};
pub use resolve::{local_path, resolve};
pub use rewrite::{AssetReport, RewritePlan, RewrittenPage, Rewriter, plan_rewrite};
pub use runner::{Mirror, PageOutcome, PageReport, PageStage};
pub use transport::Transport;

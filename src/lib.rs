//! Jersey doc generator - plain-text REST documentation from a class model.
//!
//! The library walks a read-only model of classes, interfaces and enums with
//! their declarative markers (annotations) and writes, for every type carrying
//! a `Path` marker, its endpoints and the JSON body each mutating endpoint
//! expects.
//!
//! # Architecture
//!
//! 1. [`scanner`] - Collects serialized model files from input paths
//! 2. [`parser`] - Decodes model files (JSON / YAML) into a [`model::TypeModel`]
//! 3. [`markers`] - Resolves route, verb and body markers
//! 4. [`emitter`] - Renders endpoint signatures and JSON body field lists
//! 5. [`generator`] - Filters resource types and drives the emitters
//! 6. [`config`] - Output location and exclusion list
//!
//! # Example Usage
//!
//! ```no_run
//! use jersey_doc::{
//!     config::GeneratorConfig,
//!     generator::DocGenerator,
//!     parser::ModelParser,
//!     scanner::ModelScanner,
//! };
//! use std::path::PathBuf;
//!
//! let scan = ModelScanner::new(vec![PathBuf::from("./model")]).scan().unwrap();
//! let model = ModelParser::load_model(&scan.model_files).unwrap();
//!
//! let config = GeneratorConfig::new("./docs").with_excludes(["com.acme.AdminResource"]);
//! let documented = DocGenerator::new(&config).generate(&model).unwrap();
//! println!("Documented {} resources", documented.len());
//! ```
//!
//! The document for a resource looks like this, with body properties indented
//! by a single tab:
//!
//! ```text
//! ****************************** UserResource ******************************
//! POST /users
//!
//! --------  Json Body:  --------
//! 	name
//! 	email
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module.

pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod markers;
pub mod model;
pub mod parser;
pub mod scanner;

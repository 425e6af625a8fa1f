//! Products Domain
//!
//! CRUD over a catalog of products identified by a caller-chosen positive id.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, DTO validation, envelopes
//! └──────┬──────┘
//!        │  ProductMapper (DTO ⇄ domain)
//! ┌──────▼──────┐
//! │   Service   │  ← lookup / create / merge-update / delete
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + in-memory and PostgreSQL implementations
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers,
//!     mapper::ProductMapper,
//!     repository::InMemoryProductRepository,
//!     service::ProductService,
//! };
//!
//! let service = ProductService::new(InMemoryProductRepository::new());
//! let router = axum::Router::new().nest("/products", handlers::router(service, ProductMapper::new()));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use mapper::ProductMapper;
pub use models::{BaseResponseDto, Product, ProductDto};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;

pub mod cascade_resolver;
pub mod catalog_service;
pub mod join_engine;
pub mod metric_calculator;
pub mod notifier;
pub mod ranking_filter;
pub mod results_dispatcher;
pub mod row_order;

//! Distribution module - metric subscriptions and report delivery.

mod distribution_events;
mod distribution_interactor;
mod distribution_model;
mod distribution_traits;
mod output_port;

pub use distribution_events::ReportHasBeenGeneratedEvent;
pub use distribution_interactor::ReportDistributionInteractor;
pub use distribution_model::{DeliveryChannel, DistributingMetricItem, DistributionSummary};
pub use distribution_traits::{
    DistributingMetricItemRepositoryTrait, ReportDistributionInteractorTrait, ReportOutputPort,
};
pub use output_port::{CollectingReportOutputPort, NoOpReportOutputPort};

mod get_portfolio_service;
mod update_portfolio_section_service;

pub use get_portfolio_service::GetPortfolioService;
pub use update_portfolio_section_service::UpdatePortfolioSectionService;

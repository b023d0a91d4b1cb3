mod get_portfolio;
mod update_portfolio_section;

pub use get_portfolio::{GetPortfolioError, GetPortfolioUseCase};
pub use update_portfolio_section::{UpdatePortfolioSectionError, UpdatePortfolioSectionUseCase};

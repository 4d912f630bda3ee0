pub mod d100_sales_overview;
pub mod d101_current_month;
pub mod d102_customer_churn;
pub mod d103_advanced;

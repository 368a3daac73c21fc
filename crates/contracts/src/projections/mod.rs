pub mod p900_stock_control;
pub mod p901_obra_consumption;
pub mod p902_future_obra_consumption;
pub mod p903_purchase_planning;

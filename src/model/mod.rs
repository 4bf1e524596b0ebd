pub mod customer;
pub mod queues;

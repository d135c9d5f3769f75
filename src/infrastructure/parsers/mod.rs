pub mod settlement_table;

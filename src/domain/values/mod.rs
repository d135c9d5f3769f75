pub mod contract_code;

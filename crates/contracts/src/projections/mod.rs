pub mod p900_billing_detail;

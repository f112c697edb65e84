pub mod a001_pppoe_pattern;
pub mod a002_billing_record;
pub mod a003_inventory;
pub mod a004_email_template;
pub mod a005_sms_template;
pub mod a006_location;
pub mod a007_lcp_nap_location;
pub mod a008_status_remark;
pub mod a009_reconnection_log;
pub mod a010_customer;

mod business_record;

pub use business_record::BusinessRecord;

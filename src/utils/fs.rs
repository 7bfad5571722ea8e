//! IO helper: JSON 文件读取

use std::{fs::File, io::BufReader, path::Path};

use serde::de::DeserializeOwned;

use crate::model::data_core::AppError;

/// 从文件读取并反序列化JSON数据
pub fn read_json_file<T: DeserializeOwned>(p: &Path) -> Result<T, AppError> {
    let f = File::open(p)?;
    let rdr = BufReader::new(f);
    let v = serde_json::from_reader(rdr)?;
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_is_io_error() {
        let result: Result<serde_json::Value, _> = read_json_file(&PathBuf::from("/nonexistent/print_quote.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}

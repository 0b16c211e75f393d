use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Valida que un archivo exista antes de procesarlo
pub fn validate_file_exists(path: &str) -> Result<(), Box<dyn Error>> {
    if !std::path::Path::new(path).exists() {
        return Err(format!("File not found: {}", path).into());
    }
    Ok(())
}

/// Estima cuántas filas de datos tiene un CSV descontando las filas de header
pub fn estimate_data_rows(path: &str, header_rows: usize) -> Result<usize, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(reader.lines().count().saturating_sub(header_rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_estimate_data_rows_descuenta_headers() {
        let mut tmp = std::env::temp_dir();
        tmp.push("populate_tools_estimate_test.csv");
        let path = tmp.to_str().unwrap().to_string();

        let mut f = File::create(&path).unwrap();
        writeln!(f, "header 1").unwrap();
        writeln!(f, "header 2").unwrap();
        writeln!(f, "dato 1").unwrap();
        writeln!(f, "dato 2").unwrap();
        writeln!(f, "dato 3").unwrap();
        drop(f);

        assert_eq!(estimate_data_rows(&path, 2).unwrap(), 3);
        assert_eq!(estimate_data_rows(&path, 10).unwrap(), 0);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_validate_file_exists() {
        assert!(validate_file_exists("Cargo.toml").is_ok());
        assert!(validate_file_exists("no_existe_este_archivo.csv").is_err());
    }
}

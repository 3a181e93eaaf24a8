use std::path::Path;
use std::process::Command;
use std::{fs, io};

use thiserror::Error;

/// ошибка получения справочного файла
#[derive(Debug, Error)]
pub enum FetchError
{
    /// не удалось запустить curl или записать файл на диск
    #[error("io error while fetching {url}: {source}")]
    Io {
        url: String,
        #[source]
        source: io::Error,
    },
    /// сервер или curl завершили загрузку с ошибкой
    #[error("failed to download {url}: {stderr}")]
    Download { url: String, stderr: String },
}

/// скачиваем файл по фиксированному URL, если локальная копия отсутствует.
/// существующий файл не перекачивается и не проверяется
pub fn ensure_file(path: &Path, url: &str) -> Result<(), FetchError>
{
    if path.exists() {
        return Ok(());
    }

    log::info!("скачиваем {}", url);

    let output = Command::new("curl")
        .args(["-sSfL", url])
        .output()
        .map_err(|source| FetchError::Io {
            url: url.to_owned(),
            source,
        })?;

    if !output.status.success() {
        return Err(FetchError::Download {
            url: url.to_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    fs::write(path, &output.stdout).map_err(|source| FetchError::Io {
        url: url.to_owned(),
        source,
    })
}

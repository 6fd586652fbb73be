use super::*;

/// In-memory files keyed by path, for config loading tests
#[derive(Debug, Clone, Default)]
pub struct MockFilesystem(Arc<Mutex<HashMap<String, String>>>);

impl MockFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(self, path: &str, contents: &str) -> Self {
        self.0
            .lock()
            .expect("failed to lock mock filesystem")
            .insert(path.to_string(), contents.to_string());
        self
    }

    pub fn boxed(&self) -> Filesystem {
        Box::new(self.clone())
    }
}

impl FilesystemTrait for MockFilesystem {
    fn is_file(&self, path: &str) -> bool {
        let files = self.0.lock().expect("failed to lock mock filesystem");
        files.contains_key(path)
    }

    fn read_to_string(&self, path: &str) -> std::io::Result<String> {
        let files = self.0.lock().expect("failed to lock mock filesystem");
        match files.get(path) {
            Some(contents) => Ok(contents.clone()),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "file not found",
            )),
        }
    }
}

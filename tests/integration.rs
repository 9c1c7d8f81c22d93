#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use image::GenericImageView;
    use imgreduce::{BatchRunner, ConfigError, ImageProcessor, ResizeConfig};
    use std::fs;
    use std::path::Path;

    fn write_png(path: &Path, width: u32, height: u32) {
        let img = image::RgbImage::new(width, height);
        img.save(path).unwrap();
    }

    #[test]
    fn resizes_a_single_file_by_width() {
        let temp = TempDir::new().unwrap();
        let source = temp.child("photo.png");
        write_png(source.path(), 8, 4);
        let dest = temp.child("out");
        dest.create_dir_all().unwrap();

        let config = ResizeConfig {
            file_name: Some(source.path().to_path_buf()),
            destination_directory: Some(dest.path().to_path_buf()),
            width: 4,
            ..Default::default()
        }
        .validate()
        .unwrap();

        let stats = BatchRunner::new(config).run();

        assert_eq!((stats.resized, stats.failed), (1, 0));
        // Aspect preserved: height inferred from the width ratio.
        let output = image::open(dest.path().join("photo.png")).unwrap();
        assert_eq!(output.dimensions(), (4, 2));
    }

    #[test]
    fn resizes_a_single_file_by_height() {
        let temp = TempDir::new().unwrap();
        let source = temp.child("photo.png");
        write_png(source.path(), 8, 4);
        let dest = temp.child("out");
        dest.create_dir_all().unwrap();

        let config = ResizeConfig {
            file_name: Some(source.path().to_path_buf()),
            destination_directory: Some(dest.path().to_path_buf()),
            height: 2,
            ..Default::default()
        }
        .validate()
        .unwrap();

        let stats = BatchRunner::new(config).run();

        assert_eq!((stats.resized, stats.failed), (1, 0));
        let output = image::open(dest.path().join("photo.png")).unwrap();
        assert_eq!(output.dimensions(), (4, 2));
    }

    #[test]
    fn resizes_by_percentage() {
        let temp = TempDir::new().unwrap();
        let source = temp.child("photo.png");
        write_png(source.path(), 8, 4);
        let dest = temp.child("out");
        dest.create_dir_all().unwrap();

        let config = ResizeConfig {
            file_name: Some(source.path().to_path_buf()),
            destination_directory: Some(dest.path().to_path_buf()),
            percentage: 0.5,
            ..Default::default()
        }
        .validate()
        .unwrap();

        let stats = BatchRunner::new(config).run();

        assert_eq!((stats.resized, stats.failed), (1, 0));
        let output = image::open(dest.path().join("photo.png")).unwrap();
        assert_eq!(output.dimensions(), (4, 2));
    }

    #[test]
    fn exact_dimensions_ignore_aspect_ratio() {
        let temp = TempDir::new().unwrap();
        let source = temp.child("photo.png");
        write_png(source.path(), 8, 4);
        let dest = temp.child("out");
        dest.create_dir_all().unwrap();

        let config = ResizeConfig {
            file_name: Some(source.path().to_path_buf()),
            destination_directory: Some(dest.path().to_path_buf()),
            width: 3,
            height: 3,
            ..Default::default()
        }
        .validate()
        .unwrap();

        BatchRunner::new(config).run();

        let output = image::open(dest.path().join("photo.png")).unwrap();
        assert_eq!(output.dimensions(), (3, 3));
    }

    #[test]
    fn processor_rejects_a_directory_without_writing() {
        let temp = TempDir::new().unwrap();
        let subdir = temp.child("sub");
        subdir.create_dir_all().unwrap();
        let dest = temp.child("out");
        dest.create_dir_all().unwrap();

        let config = ResizeConfig {
            destination_directory: Some(dest.path().to_path_buf()),
            width: 10,
            ..Default::default()
        };

        let result = ImageProcessor::new(&config).process(subdir.path());

        assert!(result.is_err());
        assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);
    }

    #[test]
    fn batch_continues_past_a_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let src = temp.child("in");
        src.create_dir_all().unwrap();
        write_png(src.child("good.png").path(), 8, 8);
        src.child("broken.jpg").write_binary(b"not an image").unwrap();
        let dest = temp.child("out");
        dest.create_dir_all().unwrap();

        let config = ResizeConfig {
            source_directory: Some(src.path().to_path_buf()),
            destination_directory: Some(dest.path().to_path_buf()),
            width: 4,
            ..Default::default()
        }
        .validate()
        .unwrap();

        let stats = BatchRunner::new(config).run();

        assert_eq!((stats.resized, stats.failed), (1, 1));
        // Exactly one output: the valid image.
        let outputs: Vec<_> = fs::read_dir(dest.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(outputs, vec![std::ffi::OsString::from("good.png")]);
    }

    #[test]
    fn subdirectories_count_as_failures() {
        let temp = TempDir::new().unwrap();
        let src = temp.child("in");
        src.create_dir_all().unwrap();
        write_png(src.child("good.png").path(), 8, 8);
        src.child("nested").create_dir_all().unwrap();
        let dest = temp.child("out");
        dest.create_dir_all().unwrap();

        let config = ResizeConfig {
            source_directory: Some(src.path().to_path_buf()),
            destination_directory: Some(dest.path().to_path_buf()),
            percentage: 0.25,
            ..Default::default()
        }
        .validate()
        .unwrap();

        let stats = BatchRunner::new(config).run();

        assert_eq!((stats.resized, stats.failed), (1, 1));
        let output = image::open(dest.path().join("good.png")).unwrap();
        assert_eq!(output.dimensions(), (2, 2));
    }

    #[test]
    fn an_empty_source_directory_processes_nothing() {
        let temp = TempDir::new().unwrap();
        let src = temp.child("in");
        src.create_dir_all().unwrap();

        let config = ResizeConfig {
            source_directory: Some(src.path().to_path_buf()),
            destination_directory: Some(temp.path().to_path_buf()),
            width: 10,
            ..Default::default()
        }
        .validate()
        .unwrap();

        let stats = BatchRunner::new(config).run();

        assert_eq!((stats.resized, stats.failed), (0, 0));
    }

    #[test]
    fn rerunning_overwrites_with_identical_output() {
        let temp = TempDir::new().unwrap();
        let source = temp.child("photo.png");
        write_png(source.path(), 16, 8);
        let dest = temp.child("out");
        dest.create_dir_all().unwrap();

        let config = ResizeConfig {
            file_name: Some(source.path().to_path_buf()),
            destination_directory: Some(dest.path().to_path_buf()),
            width: 8,
            ..Default::default()
        }
        .validate()
        .unwrap();

        let output = dest.path().join("photo.png");

        BatchRunner::new(config.clone()).run();
        let first = fs::read(&output).unwrap();

        BatchRunner::new(config).run();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn validation_blocks_conflicting_rules_before_any_write() {
        let temp = TempDir::new().unwrap();
        let src = temp.child("in");
        src.create_dir_all().unwrap();
        write_png(src.child("good.png").path(), 8, 8);
        let dest = temp.child("out");
        dest.create_dir_all().unwrap();

        let result = ResizeConfig {
            source_directory: Some(src.path().to_path_buf()),
            destination_directory: Some(dest.path().to_path_buf()),
            width: 4,
            percentage: 0.5,
            ..Default::default()
        }
        .validate();

        assert!(matches!(result, Err(ConfigError::ConflictingResizeRule)));
        assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_source_directory_is_fatal() {
        let temp = TempDir::new().unwrap();

        let result = ResizeConfig {
            source_directory: Some(temp.path().join("nope")),
            width: 10,
            ..Default::default()
        }
        .validate();

        assert!(matches!(result, Err(ConfigError::SourcePathNotFound(_))));
    }
}

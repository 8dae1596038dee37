//! Static branding around the search widget.

use std::path::Path;

const LOGO_SIZE: f32 = 80.0;
const MAX_CONTENT_WIDTH: f32 = 672.0;

pub(crate) struct LogoImage {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

pub(crate) fn decode_logo(bytes: &[u8]) -> Result<LogoImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let resized = if dynamic.width() > 256 || dynamic.height() > 256 {
        dynamic.thumbnail(256, 256)
    } else {
        dynamic
    }
    .to_rgba8();
    Ok(LogoImage {
        width: resized.width() as usize,
        height: resized.height() as usize,
        rgba: resized.into_raw(),
    })
}

pub struct PageShell {
    title: String,
    logo: Option<egui::TextureHandle>,
}

impl PageShell {
    pub fn new(ctx: &egui::Context, title: impl Into<String>, logo_path: Option<&Path>) -> Self {
        Self {
            title: title.into(),
            logo: logo_path.and_then(|path| load_logo_texture(ctx, path)),
        }
    }

    pub fn show(&self, ctx: &egui::Context, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(32.0);
            ui.vertical_centered(|ui| {
                ui.set_max_width(MAX_CONTENT_WIDTH);
                self.show_logo(ui);
                ui.add_space(8.0);
                ui.label(egui::RichText::new(&self.title).strong().size(34.0));
                ui.add_space(32.0);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), add_contents);
            });
        });
    }

    fn show_logo(&self, ui: &mut egui::Ui) {
        match &self.logo {
            Some(texture) => {
                let image = egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                    .fit_to_exact_size(egui::vec2(LOGO_SIZE, LOGO_SIZE));
                ui.add(image);
            }
            None => {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(LOGO_SIZE, LOGO_SIZE), egui::Sense::hover());
                let painter = ui.painter();
                painter.rect_filled(rect, 16.0, crate::ui::theme::ACCENT);
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    monogram(&self.title),
                    egui::FontId::proportional(36.0),
                    egui::Color32::WHITE,
                );
            }
        }
    }
}

fn load_logo_texture(ctx: &egui::Context, path: &Path) -> Option<egui::TextureHandle> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(path = %path.display(), "failed to read logo: {err}");
            return None;
        }
    };
    let logo = match decode_logo(&bytes) {
        Ok(logo) => logo,
        Err(err) => {
            tracing::warn!(path = %path.display(), "failed to decode logo: {err}");
            return None;
        }
    };
    let color_image =
        egui::ColorImage::from_rgba_unmultiplied([logo.width, logo.height], &logo.rgba);
    Some(ctx.load_texture("page-shell:logo", color_image, egui::TextureOptions::LINEAR))
}

/// First letter of the title, shown when no logo image is available.
fn monogram(title: &str) -> String {
    title
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monogram_uses_first_alphanumeric_character() {
        assert_eq!(monogram("LinkedIn Profile Search"), "L");
        assert_eq!(monogram("  émigré"), "É");
        assert_eq!(monogram("---"), "");
    }

    #[test]
    fn decodes_png_logo_bytes() {
        let mut png = Vec::new();
        image::RgbaImage::from_pixel(4, 2, image::Rgba([255, 0, 0, 255]))
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .expect("encode png");

        let logo = decode_logo(&png).expect("decode");
        assert_eq!((logo.width, logo.height), (4, 2));
        assert_eq!(logo.rgba.len(), 4 * 2 * 4);
    }

    #[test]
    fn rejects_garbage_logo_bytes() {
        assert!(decode_logo(b"definitely not an image").is_err());
    }
}

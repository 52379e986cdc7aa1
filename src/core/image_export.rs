//! Umwandlung von Maske und Umriss in Bilder für nachgelagerte Module
//! (Speichern, Overlay). Die Maske ist eine Label-Matrix mit genau einem
//! Objekt (Label 1).

use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use serde::{Deserialize, Serialize};

use super::{Mask, Outline};

/// Label des einzigen Objekts in der Maske.
const OBJECT_LABEL: u16 = 1;

/// Farbformat des Ausgabebildes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageMode {
    /// Schwarz/Weiß: Objekt 255, Hintergrund 0
    #[default]
    Binary,
    /// Graustufen: Label / größtes Label, skaliert auf 8 Bit
    Grayscale,
    /// Rohe Label-Werte als 16-Bit-Bild
    Uint16,
}

/// Rendert eine Maske als Bild im gewählten Format.
pub fn mask_to_image(mask: &Mask, mode: ImageMode) -> DynamicImage {
    match mode {
        ImageMode::Binary => DynamicImage::ImageLuma8(binary_image(mask)),
        ImageMode::Grayscale => {
            // Bei nur einem Objekt ist das größte Label das Objekt selbst
            let intensity = if mask.is_empty() {
                0
            } else {
                let max_label = OBJECT_LABEL;
                (f32::from(OBJECT_LABEL) / f32::from(max_label) * 255.0).round() as u8
            };
            DynamicImage::ImageLuma8(GrayImage::from_fn(mask.cols(), mask.rows(), |x, y| {
                Luma([if mask.get(y, x) { intensity } else { 0 }])
            }))
        }
        ImageMode::Uint16 => {
            let image: ImageBuffer<Luma<u16>, Vec<u16>> =
                ImageBuffer::from_fn(mask.cols(), mask.rows(), |x, y| {
                    Luma([if mask.get(y, x) { OBJECT_LABEL } else { 0 }])
                });
            DynamicImage::ImageLuma16(image)
        }
    }
}

/// Rendert einen Umriss als Schwarz/Weiß-Bild.
pub fn outline_to_image(outline: &Outline) -> DynamicImage {
    DynamicImage::ImageLuma8(binary_image(&outline.to_mask()))
}

fn binary_image(mask: &Mask) -> GrayImage {
    GrayImage::from_fn(mask.cols(), mask.rows(), |x, y| {
        Luma([if mask.get(y, x) { 255 } else { 0 }])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{extract_outline, GridSize};

    fn sample_mask() -> Mask {
        // 4 Zeilen × 6 Spalten, Objekt in Zeile 1..=2, Spalte 2..=4
        Mask::from_fn(GridSize::new(4, 6), |r, c| (1..=2).contains(&r) && (2..=4).contains(&c))
    }

    #[test]
    fn test_binary_image_dimensions_and_values() {
        let image = mask_to_image(&sample_mask(), ImageMode::Binary);
        assert_eq!((image.width(), image.height()), (6, 4));
        let luma = image.to_luma8();
        assert_eq!(luma.get_pixel(3, 1)[0], 255);
        assert_eq!(luma.get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn test_grayscale_single_object_is_full_intensity() {
        let image = mask_to_image(&sample_mask(), ImageMode::Grayscale);
        let luma = image.as_luma8().expect("8-Bit-Graustufen erwartet");
        assert_eq!(luma.get_pixel(2, 2)[0], 255);
        assert_eq!(luma.get_pixel(5, 3)[0], 0);

        let empty = mask_to_image(&Mask::new(GridSize::new(2, 2)), ImageMode::Grayscale);
        assert!(empty.as_luma8().unwrap().pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn test_uint16_keeps_raw_label() {
        let image = mask_to_image(&sample_mask(), ImageMode::Uint16);
        let luma = image.as_luma16().expect("16-Bit-Graustufen erwartet");
        assert_eq!(luma.get_pixel(4, 2)[0], 1);
        assert_eq!(luma.get_pixel(1, 1)[0], 0);
    }

    #[test]
    fn test_outline_image_marks_only_ring() {
        let mask = Mask::from_fn(GridSize::new(5, 5), |r, c| (1..=3).contains(&r) && (1..=3).contains(&c));
        let outline = extract_outline(&mask).unwrap();
        let image = outline_to_image(&outline).to_luma8();
        assert_eq!(image.get_pixel(1, 1)[0], 255);
        assert_eq!(image.get_pixel(2, 2)[0], 0);
    }
}

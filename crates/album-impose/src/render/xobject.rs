//! Image XObject creation

use album_image::ProcessedImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Embed a processed JPEG as an image XObject.
///
/// The bitmap is already JPEG-encoded, so the stream carries the bytes
/// unchanged under a DCTDecode filter.
pub(crate) fn create_image_xobject(doc: &mut Document, image: &ProcessedImage) -> ObjectId {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(image.width as i64));
    dict.set("Height", Object::Integer(image.height as i64));
    dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));

    doc.add_object(Stream::new(dict, image.data.clone()))
}

//! Event-driven decoding of a JMdict document into the object model.
//!
//! One forward pass over the event stream: the root `<JMdict>` element is
//! located, then each `<entry>` subtree is folded into an [`Entry`]. Element
//! text and attribute values go through [`escape::expand`] so entity
//! references are resolved as they are read. Elements the object model does
//! not map (e.g. `<audit>` blocks in some distributions) are skipped whole.

use std::io::BufRead;

use log::{debug, trace};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::escape::{self, Leniency};
use super::error::{JmdictError, Result};
use super::models::*;

/// Decode one complete JMdict document from `input`.
pub(crate) fn decode<R: BufRead>(input: R, leniency: Leniency) -> Result<Jmdict> {
    let mut reader = Reader::from_reader(input);
    let config = reader.config_mut();
    if leniency == Leniency::Lenient {
        // Mismatched and stray end tags are common in redistributed files.
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
    }

    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.local_name().as_ref() == b"JMdict" => {
                return decode_document(&mut reader, leniency);
            }
            Event::Empty(e) if e.local_name().as_ref() == b"JMdict" => {
                return Ok(Jmdict::default());
            }
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                return Err(JmdictError::InvalidFormat(format!(
                    "unexpected root element <{name}>, expected <JMdict>"
                )));
            }
            Event::Eof => return Err(JmdictError::UnexpectedEof { element: "JMdict" }),
            // Prolog: declaration, doctype (with its internal entity
            // subset), comments and inter-markup whitespace.
            _ => {}
        }
    }
}

fn decode_document<R: BufRead>(reader: &mut Reader<R>, leniency: Leniency) -> Result<Jmdict> {
    let mut entries = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"entry" => entries.push(decode_entry(reader, leniency)?),
                other => {
                    trace!(
                        "skipping unknown element <{}> under <JMdict>",
                        String::from_utf8_lossy(other)
                    );
                    skip_element(reader)?;
                }
            },
            Event::End(e) if e.local_name().as_ref() == b"JMdict" => break,
            Event::Eof => return Err(JmdictError::UnexpectedEof { element: "JMdict" }),
            _ => {}
        }
    }
    debug!("decoded {} dictionary entries", entries.len());
    Ok(Jmdict { entries })
}

fn decode_entry<R: BufRead>(reader: &mut Reader<R>, leniency: Leniency) -> Result<Entry> {
    let mut entry = Entry::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"ent_seq" => {
                    let text = read_element_text(reader, leniency, "ent_seq")?;
                    entry.sequence = text.trim().parse().map_err(|_| {
                        JmdictError::InvalidFormat(format!(
                            "invalid entry sequence number {:?}",
                            text.trim()
                        ))
                    })?;
                }
                b"k_ele" => entry.kanji.push(decode_kanji(reader, leniency)?),
                b"r_ele" => entry.readings.push(decode_reading(reader, leniency)?),
                b"sense" => entry.senses.push(decode_sense(reader, leniency)?),
                _ => skip_element(reader)?,
            },
            Event::End(e) if e.local_name().as_ref() == b"entry" => break,
            Event::Eof => return Err(JmdictError::UnexpectedEof { element: "entry" }),
            _ => {}
        }
    }
    Ok(entry)
}

fn decode_kanji<R: BufRead>(reader: &mut Reader<R>, leniency: Leniency) -> Result<KanjiElement> {
    let mut kanji = KanjiElement::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"keb" => kanji.expression = read_element_text(reader, leniency, "keb")?,
                b"ke_inf" => kanji
                    .information
                    .push(read_element_text(reader, leniency, "ke_inf")?),
                b"ke_pri" => kanji
                    .priorities
                    .push(read_element_text(reader, leniency, "ke_pri")?),
                _ => skip_element(reader)?,
            },
            Event::End(e) if e.local_name().as_ref() == b"k_ele" => break,
            Event::Eof => return Err(JmdictError::UnexpectedEof { element: "k_ele" }),
            _ => {}
        }
    }
    Ok(kanji)
}

fn decode_reading<R: BufRead>(
    reader: &mut Reader<R>,
    leniency: Leniency,
) -> Result<ReadingElement> {
    let mut reading = ReadingElement::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"reb" => reading.reading = read_element_text(reader, leniency, "reb")?,
                b"re_nokanji" => {
                    reading.no_kanji = true;
                    skip_element(reader)?;
                }
                b"re_restr" => reading
                    .restrictions
                    .push(read_element_text(reader, leniency, "re_restr")?),
                b"re_inf" => reading
                    .information
                    .push(read_element_text(reader, leniency, "re_inf")?),
                b"re_pri" => reading
                    .priorities
                    .push(read_element_text(reader, leniency, "re_pri")?),
                _ => skip_element(reader)?,
            },
            // The DTD defines re_nokanji as an empty element.
            Event::Empty(e) if e.local_name().as_ref() == b"re_nokanji" => {
                reading.no_kanji = true;
            }
            Event::End(e) if e.local_name().as_ref() == b"r_ele" => break,
            Event::Eof => return Err(JmdictError::UnexpectedEof { element: "r_ele" }),
            _ => {}
        }
    }
    Ok(reading)
}

fn decode_sense<R: BufRead>(reader: &mut Reader<R>, leniency: Leniency) -> Result<Sense> {
    let mut sense = Sense::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"stagk" => sense
                    .restricted_kanji
                    .push(read_element_text(reader, leniency, "stagk")?),
                b"stagr" => sense
                    .restricted_readings
                    .push(read_element_text(reader, leniency, "stagr")?),
                b"pos" => sense
                    .parts_of_speech
                    .push(read_element_text(reader, leniency, "pos")?),
                b"xref" => sense
                    .references
                    .push(read_element_text(reader, leniency, "xref")?),
                b"ant" => sense
                    .antonyms
                    .push(read_element_text(reader, leniency, "ant")?),
                b"field" => sense
                    .fields
                    .push(read_element_text(reader, leniency, "field")?),
                b"misc" => sense
                    .misc
                    .push(read_element_text(reader, leniency, "misc")?),
                b"s_inf" => sense
                    .information
                    .push(read_element_text(reader, leniency, "s_inf")?),
                b"dial" => sense
                    .dialects
                    .push(read_element_text(reader, leniency, "dial")?),
                b"lsource" => {
                    let source = decode_source(reader, &e, leniency, false)?;
                    sense.source_languages.push(source);
                }
                b"gloss" => {
                    let gloss = decode_gloss(reader, &e, leniency, false)?;
                    sense.glosses.push(gloss);
                }
                _ => skip_element(reader)?,
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"lsource" => {
                    let source = decode_source(reader, &e, leniency, true)?;
                    sense.source_languages.push(source);
                }
                b"gloss" => {
                    let gloss = decode_gloss(reader, &e, leniency, true)?;
                    sense.glosses.push(gloss);
                }
                _ => {}
            },
            Event::End(e) if e.local_name().as_ref() == b"sense" => break,
            Event::Eof => return Err(JmdictError::UnexpectedEof { element: "sense" }),
            _ => {}
        }
    }
    Ok(sense)
}

fn decode_gloss<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart<'_>,
    leniency: Leniency,
    is_empty: bool,
) -> Result<Gloss> {
    let mut gloss = Gloss::default();
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let value = attribute_value(reader, &attr.value, leniency)?;
        match attr.key.as_ref() {
            b"xml:lang" => gloss.language = Some(value),
            b"g_gend" => gloss.gender = Some(value),
            b"g_type" => gloss.gloss_type = Some(value),
            _ => {}
        }
    }
    if !is_empty {
        gloss.content = read_element_text(reader, leniency, "gloss")?;
    }
    Ok(gloss)
}

fn decode_source<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart<'_>,
    leniency: Leniency,
    is_empty: bool,
) -> Result<SourceLanguage> {
    let mut source = SourceLanguage::default();
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let value = attribute_value(reader, &attr.value, leniency)?;
        match attr.key.as_ref() {
            b"xml:lang" => source.language = Some(value),
            b"ls_type" => source.source_type = Some(value),
            b"ls_wasei" => source.wasei = value == "y",
            _ => {}
        }
    }
    if !is_empty {
        source.content = read_element_text(reader, leniency, "lsource")?;
    }
    Ok(source)
}

/// Decode an attribute value and expand any entity references in it.
fn attribute_value<R: BufRead>(
    reader: &Reader<R>,
    raw: &[u8],
    leniency: Leniency,
) -> Result<String> {
    let decoded = reader.decoder().decode(raw)?;
    let position = reader.buffer_position() as u64;
    Ok(escape::expand(&decoded, leniency, position)?.into_owned())
}

/// Collect the character data of the current element, expanding entities,
/// until its end tag. Text inside nested markup is flattened in.
fn read_element_text<R: BufRead>(
    reader: &mut Reader<R>,
    leniency: Leniency,
    element: &'static str,
) -> Result<String> {
    let mut text = String::new();
    let mut depth = 0usize;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Text(e) => {
                let raw = reader.decoder().decode(&e)?;
                let position = reader.buffer_position() as u64;
                text.push_str(&escape::expand(&raw, leniency, position)?);
            }
            // CDATA carries no entity references by definition.
            Event::CData(e) => text.push_str(&reader.decoder().decode(&e)?),
            Event::Start(_) => depth += 1,
            Event::End(_) if depth > 0 => depth -= 1,
            Event::End(_) => break,
            Event::Eof => return Err(JmdictError::UnexpectedEof { element }),
            _ => {}
        }
    }
    Ok(text)
}

/// Consume events until the end tag matching the element just opened.
fn skip_element<R: BufRead>(reader: &mut Reader<R>) -> Result<()> {
    let mut depth = 0usize;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                if depth == 0 {
                    return Ok(());
                }
                depth -= 1;
            }
            Event::Eof => return Err(JmdictError::UnexpectedEof { element: "document" }),
            _ => {}
        }
    }
}

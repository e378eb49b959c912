use super::document::{WmlDocument, STYLES_PART};
use super::sites::{color_sites, font_sites};
use crate::error::Result;
use crate::inventory::{ColorMap, FontMap};
use crate::xml::arena::XmlDocument;

/// Rewrite colors and fonts in every story part and the style sheet, and
/// return the saved package.
///
/// Word media is never model-owned; replacement images are substituted in the
/// saved archive by the caller.
pub fn rewrite(mut doc: WmlDocument, colors: &ColorMap, fonts: &FontMap) -> Result<Vec<u8>> {
    if colors.is_empty() && fonts.is_empty() {
        return doc.to_bytes();
    }

    let mut parts = doc.story_parts();
    parts.push(STYLES_PART.to_string());

    for part in parts {
        if !doc.package().has_part(&part) {
            continue;
        }
        let mut xml = match doc.package().get_xml_part(&part) {
            Ok(xml) => xml,
            Err(e) => {
                log::debug!("leaving unreadable part '{}' untouched: {}", part, e);
                continue;
            }
        };

        let mut changed = rewrite_fonts(&mut xml, fonts);
        if part != STYLES_PART {
            changed += rewrite_colors(&mut xml, colors);
        }

        if changed > 0 {
            log::debug!("{} substitutions in '{}'", changed, part);
            doc.package_mut().put_xml_part(&part, &xml)?;
        }
    }

    doc.to_bytes()
}

fn rewrite_colors(xml: &mut XmlDocument, colors: &ColorMap) -> usize {
    let mut changed = 0;
    for site in color_sites(xml) {
        let Some(new) = xml
            .attr(site.node, &site.attr)
            .and_then(|raw| colors.lookup_raw(raw))
            .map(|c| c.hex().to_string())
        else {
            continue;
        };
        xml.set_attribute(site.node, &site.attr, &new);
        for theme in site.theme_overrides() {
            xml.remove_attribute(site.node, &theme);
        }
        changed += 1;
    }
    changed
}

fn rewrite_fonts(xml: &mut XmlDocument, fonts: &FontMap) -> usize {
    let mut changed = 0;
    for site in font_sites(xml) {
        let Some(new) = xml
            .attr(site.node, &site.attr)
            .and_then(|name| fonts.lookup(name))
            .map(str::to_string)
        else {
            continue;
        };
        xml.set_attribute(site.node, &site.attr, &new);
        changed += 1;
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::namespaces::W;
    use crate::xml::parser::parse;

    #[test]
    fn colors_are_written_in_six_digit_form() {
        let mut xml = parse(r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:pPr><w:pBdr><w:top w:color="abc"/></w:pBdr></w:pPr><w:r><w:rPr><w:color w:val="auto"/></w:rPr></w:r></w:p></w:body></w:document>"#).unwrap();
        let colors: ColorMap = [("#AABBCC", "#102030"), ("#000000", "#FFFFFF")]
            .into_iter()
            .collect();

        assert_eq!(rewrite_colors(&mut xml, &colors), 1);

        let sites = color_sites(&xml);
        assert_eq!(xml.attr(sites[0].node, &W::color_attr()), Some("102030"));
        assert_eq!(xml.attr(sites[1].node, &W::val()), Some("auto"));
    }

    #[test]
    fn rewritten_colors_drop_theme_references() {
        let mut xml = parse(r#"<w:p xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:pPr><w:shd w:val="clear" w:fill="1F3864" w:themeFill="accent1" w:themeFillShade="BF"/></w:pPr><w:r><w:rPr><w:color w:val="1F3864" w:themeColor="accent1" w:themeShade="80"/></w:rPr></w:r><w:r><w:rPr><w:color w:val="00B050" w:themeColor="accent6"/></w:rPr></w:r></w:p>"#).unwrap();
        let colors: ColorMap = [("#1F3864", "#FF0000")].into_iter().collect();

        assert_eq!(rewrite_colors(&mut xml, &colors), 2);

        let sites = color_sites(&xml);
        for site in &sites[..2] {
            assert_eq!(xml.attr(site.node, &site.attr), Some("FF0000"));
            assert!(site.theme_overrides().iter().all(|t| xml.attr(site.node, t).is_none()));
        }
        let untouched = &sites[2];
        assert_eq!(
            xml.attr(untouched.node, &crate::xml::XName::new(W::NS, "themeColor")),
            Some("accent6")
        );
    }

    #[test]
    fn fonts_are_replaced_per_attribute() {
        let mut xml = parse(r#"<w:r xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:rPr><w:rFonts w:ascii="Arial" w:eastAsia="MS Mincho"/><w:b/></w:rPr></w:r>"#).unwrap();
        let fonts: FontMap = [("Arial", "Calibri")].into_iter().collect();

        assert_eq!(rewrite_fonts(&mut xml, &fonts), 1);

        let sites = font_sites(&xml);
        assert_eq!(xml.attr(sites[0].node, &W::ascii()), Some("Calibri"));
        assert_eq!(xml.attr(sites[0].node, &W::eastAsia()), Some("MS Mincho"));
    }
}

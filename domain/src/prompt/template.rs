//! Prompt templates for the two model calls of a chat turn

use crate::conversation::Message;
use crate::generation::decision::MAX_IMAGE_COUNT;
use crate::generation::response::ImageRef;
use crate::site::page::Page;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the image decision stage
    pub fn image_decision_system() -> String {
        format!(
            r#"You are part of a website-building agent, deciding whether a web development task requires images.
Analyze the conversation and the current request to determine:
1. Whether images will be needed (needsImages: true/false)
2. If needed, an image search query under 80 characters (imageQuery: string)
3. If needed, how many images might be needed (imageCount: number, at most {max})
4. Your reasoning (explanation: string)

Common cases where images are needed:
- Creating new pages (usually a header or hero image)
- Adding sections about products or services
- Creating galleries or portfolios
- Adding team member photos or testimonials with profile pictures
- Creating about-us pages

Respond with a single JSON object and nothing else, no text before or after it:
{{
  "needsImages": boolean,
  "imageQuery": string (only if needsImages is true),
  "imageCount": number (only if needsImages is true),
  "explanation": string
}}"#,
            max = MAX_IMAGE_COUNT
        )
    }

    /// System prompt for the site generation stage
    ///
    /// Embeds the current page set, the prior conversation and, when any are
    /// available, the images the model may use for static content.
    pub fn site_generation_system(
        site_structure: &[Page],
        prior_messages: &[Message],
        images: &[ImageRef],
    ) -> String {
        let structure = to_json(site_structure);
        let conversation = to_json(prior_messages);

        let mut prompt = format!(
            r#"You are a web development agent that builds and edits static websites made of standalone HTML pages.
Each page is a complete HTML document with inline CSS and JavaScript. Links between pages use their paths.

Current site structure:
{structure}

Conversation so far:
{conversation}

Decide which pages to create, update or delete to satisfy the user's request.
- "create" adds a new page; its path must not already exist.
- "update" replaces the full HTML of an existing page.
- "delete" removes an existing page; htmlContent may be empty.

Respond with a single JSON object and nothing else:
{{
  "responseText": string (a short message to the user describing what you did),
  "changes": [
    {{
      "name": string,
      "path": string,
      "htmlContent": string (the complete HTML document),
      "action": "create" | "update" | "delete"
    }}
  ]
}}"#
        );

        if !images.is_empty() {
            prompt.push_str(
                "\n\nAvailable images: use only these images for static content. \
Each entry has a 'url' and an 'alt' property; use both when adding an image.\n\n",
            );
            prompt.push_str(&to_json(images));
        }

        prompt
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "[]".to_string())
}

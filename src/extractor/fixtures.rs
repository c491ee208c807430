// Trimmed copies of origin markup, shared by extractor, client and server tests.

pub const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Latest releases</title></head>
<body>
  <div class="menu-category-kanan">
    <ul>
      <li><a href="https://nekopoi.care/category/action/">Action</a></li>
      <li><a href="https://nekopoi.care/category/romance/">Romance</a></li>
      <li><a href="https://nekopoi.care/hentai-list/">Hentai List</a></li>
    </ul>
  </div>
  <div id="content">
    <div class="eropost">
      <div class="img-thumb"><img src="https://nekopoi.care/img/shiny-3.jpg" alt=""></div>
      <h2 class="title"><a href="https://nekopoi.care/shiny-days-episode-3/"> Shiny Days Episode 3 </a></h2>
      <span class="cat-links"><a href="https://nekopoi.care/category/action/">Action</a> <a href="https://nekopoi.care/category/comedy/">Comedy</a></span>
    </div>
    <div class="eropost">
      <div class="img-thumb"><img src="https://nekopoi.care/img/moonlit-1.jpg" alt=""></div>
      <h2 class="title"><a href="https://nekopoi.care/moonlit-garden-episode-1/">Moonlit Garden Episode 1</a></h2>
      <span class="cat-links"><a href="https://nekopoi.care/category/romance/">Romance</a></span>
    </div>
    <div class="eropost">
      <div class="img-thumb"><img alt="no image"></div>
      <h2 class="title"><a href="https://nekopoi.care/quiet-harbor-ova/">Quiet Harbor OVA</a></h2>
    </div>
  </div>
  <div class="pagination">
    <a href="https://nekopoi.care/page/2">2</a>
    <a href="https://nekopoi.care/page/2">Next »</a>
  </div>
</body>
</html>"#;

pub const GENRE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <div class="menu-category-kanan">
    <ul><li><a href="https://nekopoi.care/category/action/">Action</a></li></ul>
  </div>
  <div class="eropost">
    <div class="img-thumb"><img src="https://nekopoi.care/img/shiny-3.jpg"></div>
    <h2 class="title"><a href="https://nekopoi.care/shiny-days-episode-3/">Shiny Days Episode 3</a></h2>
    <span class="cat-links"><a href="https://nekopoi.care/category/action/">Action</a></span>
  </div>
  <div class="eropost">
    <div class="img-thumb"><img src="https://nekopoi.care/img/iron-6.jpg"></div>
    <h2 class="title"><a href="https://nekopoi.care/iron-valley-episode-6/">Iron Valley Episode 6</a></h2>
    <span class="cat-links"><a href="https://nekopoi.care/category/action/">Action</a></span>
  </div>
  <div class="pagination"><a href="https://nekopoi.care/category/action/page/2">2</a></div>
</body>
</html>"#;

pub const DETAIL_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <div class="post-title"><h1>Shiny Days Episode 3</h1></div>
  <img class="wp-post-image" src="https://nekopoi.care/img/shiny-3-full.jpg">
  <span class="cat-links"><a href="https://nekopoi.care/category/action/">Action</a><a href="https://nekopoi.care/category/comedy/">Comedy</a></span>
  <div class="responsive-embed"><iframe src="https://kstream.example/embed/abc"></iframe></div>
  <div class="mirrors"><a href="https://nekopoi.care/go?to=https://mirror.example/v/abc">Mirror 1</a></div>
  <div class="dlbox">
    <a href="https://files.example/shiny-3-480.mp4">480p</a>
    <a href="https://files.example/shiny-3-720.mp4">720p</a>
    <a href="https://files.example/shiny-3-broken.mp4"></a>
  </div>
  <div class="eplister">
    <ul>
      <li><a href="https://nekopoi.care/shiny-days-episode-3/"><div class="epl-title">Episode 3</div><div class="epl-date">March 3, 2024</div></a></li>
      <li><a href="https://nekopoi.care/shiny-days-episode-2/"><div class="epl-title">Episode 2</div><div class="epl-date">February 25, 2024</div></a></li>
    </ul>
  </div>
  <div class="related-posts">
    <div class="item-related">
      <div class="img-related"><img src="https://nekopoi.care/img/moonlit-1.jpg"></div>
      <h3 class="title-related"><a href="https://nekopoi.care/moonlit-garden-episode-1/">Moonlit Garden Episode 1</a></h3>
    </div>
    <div class="item-related">
      <h3 class="title-related"><a href="https://nekopoi.care/quiet-harbor-ova/">Quiet Harbor OVA</a></h3>
    </div>
  </div>
</body>
</html>"#;
